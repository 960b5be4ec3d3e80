use paytrack::application::module::PaymentModule;
use paytrack::domain::payment::PaymentId;
use paytrack::domain::ports::GatewayRef;
use paytrack::error::{GatewayError, PaymentError};
use paytrack::infrastructure::gateways::{CardGateway, CryptoGateway, PayPalGateway};
use paytrack::infrastructure::mock::MockGateway;
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn test_gateways_are_interchangeable() {
    let gateways: Vec<GatewayRef> = vec![
        Arc::new(MockGateway::new()),
        Arc::new(PayPalGateway::new()),
        Arc::new(CardGateway::new()),
        Arc::new(CryptoGateway::new()),
    ];

    for gateway in gateways {
        let name = gateway.name();
        let module = PaymentModule::new(gateway);
        let id = module.pay("Coffee", 5).await.unwrap();

        let record = module.info(id).await.unwrap();
        assert_eq!(record.description, "Coffee", "gateway {name}");
        assert_eq!(module.balance().await, 5, "gateway {name}");
    }
}

#[tokio::test]
async fn test_crypto_payments_cannot_be_cancelled() {
    let module = PaymentModule::new(Arc::new(CryptoGateway::new()));
    let id = module.pay("Coffee", 5).await.unwrap();

    assert!(matches!(
        module.cancel(id).await,
        Err(PaymentError::CannotCancel(GatewayError::Irreversible(_)))
    ));
    assert!(!module.info(id).await.unwrap().cancelled);
}

#[tokio::test]
async fn test_card_decline_is_payment_failure() {
    let module = PaymentModule::new(Arc::new(CardGateway::with_limit(10)));

    assert!(matches!(
        module.pay("Laptop", 11).await,
        Err(PaymentError::PaymentFailed(GatewayError::Declined(_)))
    ));
    assert!(module.is_empty().await);
}

#[tokio::test]
async fn test_paypal_identifiers_come_from_gateway() {
    let module = PaymentModule::new(Arc::new(PayPalGateway::new()));
    let id = module.pay("Coffee", 5).await.unwrap();
    assert_eq!(id, PaymentId::new(1000));
    module.cancel(id).await.unwrap();
}

#[tokio::test]
async fn test_module_shared_across_tasks() {
    let module = Arc::new(PaymentModule::new(Arc::new(MockGateway::new())));

    let mut handles = Vec::new();
    for i in 1..=20 {
        let module = module.clone();
        handles.push(tokio::spawn(async move {
            module.pay(&format!("order-{i}"), i).await.unwrap()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), 20);
    assert_eq!(module.len().await, 20);
    assert_eq!(module.balance().await, (1..=20).sum::<u128>());
}
