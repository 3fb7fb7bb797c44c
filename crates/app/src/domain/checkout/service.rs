//! Checkout session service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;

use kasse::{currency, pricing::LineItemRequest, vat};

use crate::domain::{
    checkout::{
        errors::CheckoutServiceError,
        models::{
            CheckoutSession, CheckoutSessionUpdate, CheckoutTotals, CompleteCheckoutSession,
            CompletedCheckout, NewCheckoutSession, SessionStatus, SessionUpdate,
        },
        pricing::PricingCalculator,
        store::SessionStore,
    },
    orders::{
        OrderSink,
        models::{NewOrder, OrderLine},
    },
    payments::{
        PaymentDelegate,
        models::{DisplayLine, HostedSessionRequest},
    },
};

/// Fallback order email when the caller supplies none.
const DEFAULT_ORDER_EMAIL: &str = "checkout@agentic.com";

/// The checkout session lifecycle contract.
#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Price a cart and persist it as a new `created` session.
    async fn create(
        &self,
        new_session: NewCheckoutSession,
    ) -> Result<CheckoutSession, CheckoutServiceError>;

    /// Fetch the most recently persisted state of a session.
    async fn get(&self, id: &str) -> Result<CheckoutSession, CheckoutServiceError>;

    /// Re-price and persist a session with the given partial update.
    async fn update(
        &self,
        id: &str,
        update: CheckoutSessionUpdate,
    ) -> Result<CheckoutSession, CheckoutServiceError>;

    /// Take payment, persist the order and mark the session `completed`.
    ///
    /// The stored `idempotency_key` is not consulted: repeated calls run
    /// payment again. Deduplication is the caller's concern.
    async fn complete(
        &self,
        id: &str,
        completion: CompleteCheckoutSession,
    ) -> Result<CompletedCheckout, CheckoutServiceError>;
}

/// The engine orchestrating pricing, storage, payment and order creation.
///
/// The engine exclusively owns session state transitions; the store is a
/// passive ledger and the collaborators are narrow capabilities injected at
/// construction. Within one session, callers are expected to issue calls
/// sequentially; concurrent writes to the same id are last-write-wins.
#[derive(Clone)]
pub struct CheckoutEngine {
    store: Arc<dyn SessionStore>,
    pricing: PricingCalculator,
    payment: Arc<dyn PaymentDelegate>,
    orders: Arc<dyn OrderSink>,
}

impl CheckoutEngine {
    #[must_use]
    pub fn new(
        store: Arc<dyn SessionStore>,
        pricing: PricingCalculator,
        payment: Arc<dyn PaymentDelegate>,
        orders: Arc<dyn OrderSink>,
    ) -> Self {
        Self {
            store,
            pricing,
            payment,
            orders,
        }
    }
}

#[async_trait]
impl CheckoutService for CheckoutEngine {
    async fn create(
        &self,
        new_session: NewCheckoutSession,
    ) -> Result<CheckoutSession, CheckoutServiceError> {
        validate_items(&new_session.items)?;

        if !currency::is_supported(&new_session.currency) {
            return Err(CheckoutServiceError::UnsupportedCurrency);
        }

        let calculation = self
            .pricing
            .calculate(&new_session.items, new_session.shipping_address.as_ref(), None)
            .await?;

        let now = Timestamp::now();

        let session = CheckoutSession {
            id: CheckoutSession::generate_id(),
            status: SessionStatus::Created,
            items: calculation.items,
            shipping_address: new_session.shipping_address,
            shipping_options: calculation.shipping_options.into_vec(),
            selected_shipping: None,
            currency: new_session.currency,
            vat_rate: vat::norway_vat_rate(),
            subtotal: calculation.subtotal,
            shipping_amount: calculation.shipping_amount,
            vat_amount: calculation.vat_amount,
            grand_total: calculation.grand_total,
            messages: calculation.messages,
            idempotency_key: new_session.idempotency_key.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let created = self.store.create(session).await?;

        info!(
            session = %created.id,
            grand_total = created.grand_total,
            "checkout session created"
        );

        Ok(created)
    }

    async fn get(&self, id: &str) -> Result<CheckoutSession, CheckoutServiceError> {
        self.store
            .get(id)
            .await?
            .ok_or(CheckoutServiceError::NotFound)
    }

    async fn update(
        &self,
        id: &str,
        update: CheckoutSessionUpdate,
    ) -> Result<CheckoutSession, CheckoutServiceError> {
        if update.is_empty() {
            return Err(CheckoutServiceError::NoUpdateFields);
        }

        if let Some(items) = &update.items {
            validate_items(items)?;
        }

        let existing = self
            .store
            .get(id)
            .await?
            .ok_or(CheckoutServiceError::NotFound)?;

        if existing.is_completed() {
            return Err(CheckoutServiceError::AlreadyCompleted);
        }

        // Re-price against the new items, or the existing ones when only the
        // shipping choice or address changed.
        let requests: Vec<LineItemRequest> = match &update.items {
            Some(items) => items.clone(),
            None => existing
                .items
                .iter()
                .map(|item| LineItemRequest {
                    sku: item.sku.clone(),
                    quantity: item.quantity,
                })
                .collect(),
        };

        let address = update
            .shipping_address
            .as_ref()
            .or(existing.shipping_address.as_ref());
        let selected = update
            .shipping_option
            .as_deref()
            .or(existing.selected_shipping.as_deref());

        let calculation = self.pricing.calculate(&requests, address, selected).await?;

        // Derived monetary fields are always replaced wholesale; `items`
        // content only changes when the caller actually sent items.
        let fields = SessionUpdate {
            status: Some(SessionStatus::Updated),
            items: update.items.is_some().then_some(calculation.items),
            shipping_address: update.shipping_address,
            shipping_options: Some(calculation.shipping_options.into_vec()),
            selected_shipping: update.shipping_option,
            subtotal: Some(calculation.subtotal),
            shipping_amount: Some(calculation.shipping_amount),
            vat_amount: Some(calculation.vat_amount),
            grand_total: Some(calculation.grand_total),
            messages: Some(calculation.messages),
            idempotency_key: None,
        };

        self.store
            .update(id, fields)
            .await?
            .ok_or(CheckoutServiceError::NotFound)
    }

    async fn complete(
        &self,
        id: &str,
        completion: CompleteCheckoutSession,
    ) -> Result<CompletedCheckout, CheckoutServiceError> {
        let session = self
            .store
            .get(id)
            .await?
            .ok_or(CheckoutServiceError::NotFound)?;

        if session.is_completed() {
            return Err(CheckoutServiceError::AlreadyCompleted);
        }

        // Two alternative payment strategies: confirm a delegated token, or
        // stand up a hosted payment page when no token was supplied.
        let (payment_reference, payment_intent_id, payment_url) =
            match completion.payment_token.as_deref() {
                Some(token) => {
                    let receipt = self
                        .payment
                        .confirm(token, session.grand_total, &session.currency)
                        .await?;

                    (session.id.clone(), Some(receipt.payment_intent_id), None)
                }
                None => {
                    let request = HostedSessionRequest {
                        session_id: session.id.clone(),
                        currency: session.currency.clone(),
                        lines: session
                            .items
                            .iter()
                            .map(|item| DisplayLine {
                                name: item.name.clone(),
                                unit_amount: item.unit_price,
                                quantity: item.quantity,
                            })
                            .collect(),
                        shipping_amount: session.shipping_amount,
                    };

                    let hosted = self.payment.create_hosted_session(request).await?;

                    (hosted.id, None, Some(hosted.url))
                }
            };

        let new_order = NewOrder {
            payment_reference,
            payment_intent_id,
            customer_email: completion
                .email
                .unwrap_or_else(|| DEFAULT_ORDER_EMAIL.to_owned()),
            customer_name: completion.name,
            total_amount: session.grand_total,
            currency: session.currency.clone(),
            shipping_address: session.shipping_address.clone(),
        };

        let lines: Vec<OrderLine> = session
            .items
            .iter()
            .map(|item| OrderLine {
                sku: item.sku.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                currency: session.currency.clone(),
            })
            .collect();

        let order = self.orders.persist(new_order, &lines).await?;

        // Only after payment and order creation succeed does the session flip
        // to its terminal state; any earlier failure leaves the stored record
        // untouched.
        let completed = self
            .store
            .update(
                id,
                SessionUpdate {
                    status: Some(SessionStatus::Completed),
                    ..SessionUpdate::default()
                },
            )
            .await?
            .ok_or(CheckoutServiceError::NotFound)?;

        info!(
            session = %completed.id,
            order = %order.id,
            grand_total = completed.grand_total,
            "checkout session completed"
        );

        Ok(CompletedCheckout {
            order_id: order.id,
            status: SessionStatus::Completed,
            total: CheckoutTotals {
                subtotal: completed.subtotal,
                shipping: completed.shipping_amount,
                vat: completed.vat_amount,
                grand_total: completed.grand_total,
            },
            currency: completed.currency,
            payment_url,
        })
    }
}

fn validate_items(items: &[LineItemRequest]) -> Result<(), CheckoutServiceError> {
    if items.is_empty() {
        return Err(CheckoutServiceError::EmptyItems);
    }

    if items.iter().any(|item| item.quantity == 0) {
        return Err(CheckoutServiceError::NonPositiveQuantity);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rustc_hash::FxHashMap;
    use testresult::TestResult;
    use uuid::Uuid;

    use kasse::{fixtures, pricing::CatalogProduct, shipping::ShippingAddress};

    use crate::domain::{
        catalog::MockCatalogLookup,
        checkout::store::InMemorySessionStore,
        orders::{MockOrderSink, errors::OrderSinkError, models::Order},
        payments::{
            MockPaymentDelegate,
            errors::PaymentError,
            models::{HostedPaymentSession, PaymentReceipt},
        },
    };

    use super::*;

    fn fixture_catalog() -> FxHashMap<String, CatalogProduct> {
        fixtures::catalog([
            fixtures::product("A", "Genser", 10_000, 10),
            fixtures::product("B", "Lue", 5_000, 2),
        ])
    }

    fn catalog_lookup(catalog: FxHashMap<String, CatalogProduct>) -> MockCatalogLookup {
        let mut lookup = MockCatalogLookup::new();

        lookup.expect_resolve().returning(move |_| Ok(catalog.clone()));

        lookup
    }

    fn make_order(total_amount: i64) -> Order {
        Order {
            id: Uuid::now_v7(),
            status: "paid".to_owned(),
            total_amount,
            currency: "NOK".to_owned(),
            created_at: Timestamp::now(),
        }
    }

    struct EngineBuilder {
        store: Arc<InMemorySessionStore>,
        catalog: MockCatalogLookup,
        payment: MockPaymentDelegate,
        orders: MockOrderSink,
    }

    impl EngineBuilder {
        fn new() -> Self {
            Self {
                store: Arc::new(InMemorySessionStore::new()),
                catalog: catalog_lookup(fixture_catalog()),
                payment: MockPaymentDelegate::new(),
                orders: MockOrderSink::new(),
            }
        }

        fn build(self) -> (CheckoutEngine, Arc<InMemorySessionStore>) {
            let store = self.store.clone();

            let engine = CheckoutEngine::new(
                self.store,
                PricingCalculator::new(Arc::new(self.catalog)),
                Arc::new(self.payment),
                Arc::new(self.orders),
            );

            (engine, store)
        }
    }

    fn new_session(items: Vec<LineItemRequest>) -> NewCheckoutSession {
        NewCheckoutSession {
            items,
            shipping_address: Some(norway()),
            currency: "NOK".to_owned(),
            idempotency_key: None,
        }
    }

    fn norway() -> ShippingAddress {
        ShippingAddress {
            postal_code: "0150".to_owned(),
            country: "NO".to_owned(),
        }
    }

    fn request(sku: &str, quantity: u32) -> LineItemRequest {
        LineItemRequest {
            sku: sku.to_owned(),
            quantity,
        }
    }

    #[tokio::test]
    async fn create_prices_the_cart_and_persists_a_created_session() -> TestResult {
        let (engine, store) = EngineBuilder::new().build();

        let session = engine.create(new_session(vec![request("A", 1)])).await?;

        assert_eq!(session.status, SessionStatus::Created);
        assert_eq!(session.subtotal, 10_000);
        assert_eq!(session.shipping_amount, 4_900);
        assert_eq!(session.vat_amount, 2_500);
        assert_eq!(session.grand_total, 17_400);
        assert_eq!(session.currency, "NOK");
        assert!(session.messages.is_empty(), "no warnings expected");

        let stored = store.get(&session.id).await?.expect("session persisted");

        assert_eq!(stored.grand_total, 17_400);

        Ok(())
    }

    #[tokio::test]
    async fn create_with_empty_items_is_rejected() {
        let (engine, _store) = EngineBuilder::new().build();

        let result = engine.create(new_session(Vec::new())).await;

        assert!(
            matches!(result, Err(CheckoutServiceError::EmptyItems)),
            "expected EmptyItems, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_with_zero_quantity_is_rejected() {
        let (engine, _store) = EngineBuilder::new().build();

        let result = engine.create(new_session(vec![request("A", 0)])).await;

        assert!(
            matches!(result, Err(CheckoutServiceError::NonPositiveQuantity)),
            "expected NonPositiveQuantity, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_with_unsupported_currency_is_rejected() {
        let (engine, _store) = EngineBuilder::new().build();

        let mut new_session = new_session(vec![request("A", 1)]);
        new_session.currency = "USD".to_owned();

        let result = engine.create(new_session).await;

        assert!(
            matches!(result, Err(CheckoutServiceError::UnsupportedCurrency)),
            "expected UnsupportedCurrency, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_clamps_quantity_to_stock_with_a_message() -> TestResult {
        let (engine, _store) = EngineBuilder::new().build();

        let session = engine.create(new_session(vec![request("B", 5)])).await?;

        let line = session.items.first().expect("expected a line");

        assert_eq!(line.quantity, 2);
        assert_eq!(
            session.messages,
            vec!["Insufficient stock for Lue. Available: 2".to_owned()]
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_returns_the_persisted_session() -> TestResult {
        let (engine, _store) = EngineBuilder::new().build();

        let created = engine.create(new_session(vec![request("A", 1)])).await?;
        let fetched = engine.get(&created.id).await?;

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.grand_total, created.grand_total);

        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_id_returns_not_found() {
        let (engine, _store) = EngineBuilder::new().build();

        let result = engine.get("cs_missing").await;

        assert!(
            matches!(result, Err(CheckoutServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_shipping_option_changes_shipping_only() -> TestResult {
        let (engine, _store) = EngineBuilder::new().build();

        let created = engine.create(new_session(vec![request("A", 1)])).await?;

        let update = CheckoutSessionUpdate {
            shipping_option: Some("express".to_owned()),
            ..CheckoutSessionUpdate::default()
        };

        let updated = engine.update(&created.id, update).await?;

        assert_eq!(updated.status, SessionStatus::Updated);
        assert_eq!(updated.items, created.items, "items must be unchanged");
        assert_eq!(updated.shipping_amount, 9_900);
        assert_eq!(updated.grand_total, 10_000 + 9_900 + 2_500);
        assert_eq!(updated.selected_shipping.as_deref(), Some("express"));

        Ok(())
    }

    #[tokio::test]
    async fn update_items_replaces_all_derived_fields() -> TestResult {
        let (engine, _store) = EngineBuilder::new().build();

        let created = engine.create(new_session(vec![request("A", 1)])).await?;

        let update = CheckoutSessionUpdate {
            items: Some(vec![request("A", 2), request("B", 1)]),
            ..CheckoutSessionUpdate::default()
        };

        let updated = engine.update(&created.id, update).await?;

        assert_eq!(updated.items.len(), 2);
        assert_eq!(updated.subtotal, 25_000);
        assert_eq!(
            updated.grand_total,
            updated.subtotal + updated.shipping_amount + updated.vat_amount
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_with_unknown_shipping_id_falls_back_to_standard() -> TestResult {
        let (engine, _store) = EngineBuilder::new().build();

        let created = engine.create(new_session(vec![request("A", 1)])).await?;

        let update = CheckoutSessionUpdate {
            shipping_option: Some("overnight".to_owned()),
            ..CheckoutSessionUpdate::default()
        };

        let updated = engine.update(&created.id, update).await?;

        assert_eq!(updated.shipping_amount, 4_900, "falls back to standard");
        assert_eq!(updated.grand_total, 17_400);

        Ok(())
    }

    #[tokio::test]
    async fn update_without_fields_is_rejected() -> TestResult {
        let (engine, _store) = EngineBuilder::new().build();

        let created = engine.create(new_session(vec![request("A", 1)])).await?;

        let result = engine
            .update(&created.id, CheckoutSessionUpdate::default())
            .await;

        assert!(
            matches!(result, Err(CheckoutServiceError::NoUpdateFields)),
            "expected NoUpdateFields, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_id_returns_not_found() {
        let (engine, _store) = EngineBuilder::new().build();

        let update = CheckoutSessionUpdate {
            shipping_option: Some("express".to_owned()),
            ..CheckoutSessionUpdate::default()
        };

        let result = engine.update("cs_missing", update).await;

        assert!(
            matches!(result, Err(CheckoutServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn complete_with_token_confirms_payment_and_persists_the_order() -> TestResult {
        let mut builder = EngineBuilder::new();

        builder
            .payment
            .expect_confirm()
            .once()
            .withf(|token, amount, currency| {
                token == "tok_visa" && *amount == 17_400 && currency == "NOK"
            })
            .returning(|_, _, _| {
                Ok(PaymentReceipt {
                    payment_intent_id: "pi_1".to_owned(),
                })
            });

        builder.payment.expect_create_hosted_session().never();

        builder
            .orders
            .expect_persist()
            .once()
            .withf(|order, lines| {
                order.total_amount == 17_400
                    && order.payment_intent_id.as_deref() == Some("pi_1")
                    && order.customer_email == "kari@example.no"
                    && lines.len() == 1
            })
            .returning(|order, _| Ok(make_order(order.total_amount)));

        let (engine, store) = builder.build();

        let created = engine.create(new_session(vec![request("A", 1)])).await?;

        let completion = CompleteCheckoutSession {
            payment_token: Some("tok_visa".to_owned()),
            email: Some("kari@example.no".to_owned()),
            name: Some("Kari Nordmann".to_owned()),
        };

        let completed = engine.complete(&created.id, completion).await?;

        assert_eq!(completed.status, SessionStatus::Completed);
        assert_eq!(completed.total.subtotal, 10_000);
        assert_eq!(completed.total.shipping, 4_900);
        assert_eq!(completed.total.vat, 2_500);
        assert_eq!(completed.total.grand_total, 17_400);
        assert_eq!(completed.payment_url, None);

        let stored = store.get(&created.id).await?.expect("session persisted");

        assert_eq!(stored.status, SessionStatus::Completed);

        Ok(())
    }

    #[tokio::test]
    async fn complete_without_token_uses_the_hosted_flow() -> TestResult {
        let mut builder = EngineBuilder::new();

        builder
            .payment
            .expect_create_hosted_session()
            .once()
            .withf(|request| {
                request.currency == "NOK"
                    && request.shipping_amount == 4_900
                    && request.lines.len() == 1
            })
            .returning(|_| {
                Ok(HostedPaymentSession {
                    id: "hps_1".to_owned(),
                    url: "https://checkout.stripe.com/pay/hps_1".to_owned(),
                })
            });

        builder.payment.expect_confirm().never();

        builder
            .orders
            .expect_persist()
            .once()
            .withf(|order, _lines| {
                order.payment_reference == "hps_1"
                    && order.customer_email == "checkout@agentic.com"
            })
            .returning(|order, _| Ok(make_order(order.total_amount)));

        let (engine, _store) = builder.build();

        let created = engine.create(new_session(vec![request("A", 1)])).await?;

        let completed = engine
            .complete(&created.id, CompleteCheckoutSession::default())
            .await?;

        assert_eq!(
            completed.payment_url.as_deref(),
            Some("https://checkout.stripe.com/pay/hps_1")
        );

        Ok(())
    }

    #[tokio::test]
    async fn completed_session_rejects_further_mutation() -> TestResult {
        let mut builder = EngineBuilder::new();

        builder
            .payment
            .expect_confirm()
            .returning(|_, _, _| {
                Ok(PaymentReceipt {
                    payment_intent_id: "pi_1".to_owned(),
                })
            });

        builder
            .orders
            .expect_persist()
            .once()
            .returning(|order, _| Ok(make_order(order.total_amount)));

        let (engine, store) = builder.build();

        let created = engine.create(new_session(vec![request("A", 1)])).await?;

        let completion = CompleteCheckoutSession {
            payment_token: Some("tok_visa".to_owned()),
            ..CompleteCheckoutSession::default()
        };

        engine.complete(&created.id, completion.clone()).await?;

        let before = store.get(&created.id).await?.expect("session persisted");

        let update = CheckoutSessionUpdate {
            shipping_option: Some("express".to_owned()),
            ..CheckoutSessionUpdate::default()
        };

        let update_result = engine.update(&created.id, update).await;
        let complete_result = engine.complete(&created.id, completion).await;

        assert!(
            matches!(update_result, Err(CheckoutServiceError::AlreadyCompleted)),
            "expected AlreadyCompleted, got {update_result:?}"
        );
        assert!(
            matches!(complete_result, Err(CheckoutServiceError::AlreadyCompleted)),
            "expected AlreadyCompleted, got {complete_result:?}"
        );

        let after = store.get(&created.id).await?.expect("session persisted");

        assert_eq!(after.grand_total, before.grand_total);
        assert_eq!(after.status, SessionStatus::Completed);

        Ok(())
    }

    #[tokio::test]
    async fn payment_failure_leaves_the_session_untouched() -> TestResult {
        let mut builder = EngineBuilder::new();

        builder.payment.expect_confirm().returning(|_, _, _| {
            Err(PaymentError::UnexpectedResponse("card declined".to_owned()))
        });

        builder.orders.expect_persist().never();

        let (engine, store) = builder.build();

        let created = engine.create(new_session(vec![request("A", 1)])).await?;

        let completion = CompleteCheckoutSession {
            payment_token: Some("tok_visa".to_owned()),
            ..CompleteCheckoutSession::default()
        };

        let result = engine.complete(&created.id, completion).await;

        assert!(
            matches!(result, Err(CheckoutServiceError::Payment(_))),
            "expected Payment error, got {result:?}"
        );

        let stored = store.get(&created.id).await?.expect("session persisted");

        assert_eq!(stored.status, SessionStatus::Created, "no partial completion");

        Ok(())
    }

    #[tokio::test]
    async fn order_sink_failure_leaves_the_session_untouched() -> TestResult {
        let mut builder = EngineBuilder::new();

        builder.payment.expect_confirm().returning(|_, _, _| {
            Ok(PaymentReceipt {
                payment_intent_id: "pi_1".to_owned(),
            })
        });

        builder
            .orders
            .expect_persist()
            .returning(|_, _| Err(OrderSinkError::Sql(sqlx::Error::PoolClosed)));

        let (engine, store) = builder.build();

        let created = engine.create(new_session(vec![request("A", 1)])).await?;

        let completion = CompleteCheckoutSession {
            payment_token: Some("tok_visa".to_owned()),
            ..CompleteCheckoutSession::default()
        };

        let result = engine.complete(&created.id, completion).await;

        assert!(
            matches!(result, Err(CheckoutServiceError::OrderSink(_))),
            "expected OrderSink error, got {result:?}"
        );

        let stored = store.get(&created.id).await?.expect("session persisted");

        assert_eq!(stored.status, SessionStatus::Created, "no partial completion");

        Ok(())
    }

    #[tokio::test]
    async fn complete_unknown_id_returns_not_found() {
        let (engine, _store) = EngineBuilder::new().build();

        let result = engine
            .complete("cs_missing", CompleteCheckoutSession::default())
            .await;

        assert!(
            matches!(result, Err(CheckoutServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
