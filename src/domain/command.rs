use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Pay,
    Cancel,
    Info,
}

/// One request for the payment module, as read from the command stream.
///
/// Which fields are required depends on `type`: `pay` uses `description` and
/// `amount`, `cancel` and `info` use `id`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Command {
    pub r#type: CommandType,
    pub description: Option<String>,
    pub amount: Option<i64>,
    pub id: Option<u64>,
}

impl Command {
    pub fn pay(description: &str, amount: i64) -> Self {
        Self {
            r#type: CommandType::Pay,
            description: Some(description.to_string()),
            amount: Some(amount),
            id: None,
        }
    }

    pub fn cancel(id: u64) -> Self {
        Self {
            r#type: CommandType::Cancel,
            description: None,
            amount: None,
            id: Some(id),
        }
    }

    pub fn info(id: u64) -> Self {
        Self {
            r#type: CommandType::Info,
            description: None,
            amount: None,
            id: Some(id),
        }
    }
}
