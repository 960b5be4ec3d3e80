use super::module::PaymentModule;
use crate::domain::command::{Command, CommandType};
use crate::domain::payment::{PaymentId, PaymentRecord};
use crate::error::{PaymentError, Result};

/// What a successfully executed [`Command`] produced.
#[derive(Debug, PartialEq, Clone)]
pub enum Outcome {
    Paid(PaymentId),
    Cancelled(PaymentId),
    Info(PaymentId, PaymentRecord),
}

/// Runs one command against the module.
///
/// Missing fields are reported as [`PaymentError::InvalidArgument`], except
/// for a missing `pay` description, which is passed on as empty so the module
/// applies its own validation order.
pub async fn execute(module: &PaymentModule, command: Command) -> Result<Outcome> {
    match command.r#type {
        CommandType::Pay => {
            let amount = command.amount.ok_or_else(|| missing("pay", "amount"))?;
            let description = command.description.unwrap_or_default();
            let id = module.pay(&description, amount).await?;
            Ok(Outcome::Paid(id))
        }
        CommandType::Cancel => {
            let id = PaymentId::new(command.id.ok_or_else(|| missing("cancel", "id"))?);
            module.cancel(id).await?;
            Ok(Outcome::Cancelled(id))
        }
        CommandType::Info => {
            let id = PaymentId::new(command.id.ok_or_else(|| missing("info", "id"))?);
            let record = module.info(id).await?;
            Ok(Outcome::Info(id, record))
        }
    }
}

fn missing(command: &str, field: &str) -> PaymentError {
    PaymentError::InvalidArgument(format!("{command} requires an {field}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mock::MockGateway;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_execute_pay_cancel_info() {
        let module = PaymentModule::new(Arc::new(MockGateway::new()));

        let paid = execute(&module, Command::pay("Coffee", 5)).await.unwrap();
        assert_eq!(paid, Outcome::Paid(PaymentId::new(1)));

        let cancelled = execute(&module, Command::cancel(1)).await.unwrap();
        assert_eq!(cancelled, Outcome::Cancelled(PaymentId::new(1)));

        match execute(&module, Command::info(1)).await.unwrap() {
            Outcome::Info(id, record) => {
                assert_eq!(id, PaymentId::new(1));
                assert!(record.cancelled);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let module = PaymentModule::new(Arc::new(MockGateway::new()));

        let mut pay = Command::pay("Coffee", 5);
        pay.amount = None;
        assert!(matches!(
            execute(&module, pay).await,
            Err(PaymentError::InvalidArgument(_))
        ));

        let mut cancel = Command::cancel(1);
        cancel.id = None;
        assert!(matches!(
            execute(&module, cancel).await,
            Err(PaymentError::InvalidArgument(_))
        ));

        let mut pay = Command::pay("Coffee", 0);
        pay.description = None;
        assert!(matches!(
            execute(&module, pay).await,
            Err(PaymentError::InvalidAmount(0))
        ));

        assert!(module.is_empty().await);
    }
}
