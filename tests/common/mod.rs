use paytrack::application::module::PaymentModule;
use paytrack::infrastructure::mock::MockGateway;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// A fresh module bound to a fresh mock gateway, with a handle to the gateway
/// for scripting failures.
#[allow(dead_code)]
pub fn mock_module() -> (Arc<MockGateway>, PaymentModule) {
    let gateway = Arc::new(MockGateway::new());
    let module = PaymentModule::new(gateway.clone());
    (gateway, module)
}

/// Writes a command CSV (header included) to a temporary file.
#[allow(dead_code)]
pub fn command_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "type, description, amount, id").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}
