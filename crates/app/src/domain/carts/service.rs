//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;
use uuid::Uuid;

use crashcart::carts::{Access, Cart};

use crate::{
    domain::carts::{
        data::{CartUpdate, NewAccess, NewCart},
        errors::CartsServiceError,
    },
    storage::JsonStore,
};

#[derive(Debug, Clone)]
pub struct JsonCartsService {
    store: Arc<JsonStore>,
}

impl JsonCartsService {
    #[must_use]
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CartsService for JsonCartsService {
    async fn list_carts(&self) -> Result<Vec<Cart>, CartsServiceError> {
        Ok(self.store.load_carts().await?)
    }

    async fn get_cart(&self, cart: Uuid) -> Result<Cart, CartsServiceError> {
        self.store
            .load_carts()
            .await?
            .into_iter()
            .find(|record| record.id == cart)
            .ok_or(CartsServiceError::NotFound)
    }

    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError> {
        if cart.name.trim().is_empty() || cart.location.trim().is_empty() {
            return Err(CartsServiceError::MissingRequiredData);
        }

        // Drawers are copied from the default stock as it stands right now;
        // later template edits only reach this cart through an explicit sync.
        let template = self.store.load_template().await?;

        let record = Cart::from_template(
            Uuid::now_v7(),
            cart.name,
            cart.location,
            cart.status,
            &template,
        );

        let mut carts = self.store.load_carts().await?;

        carts.push(record.clone());

        self.store.save_carts(&carts).await?;

        info!(cart = %record.id, "created cart");

        Ok(record)
    }

    async fn update_cart(&self, cart: Uuid, update: CartUpdate) -> Result<Cart, CartsServiceError> {
        let mut carts = self.store.load_carts().await?;

        let record = carts
            .iter_mut()
            .find(|record| record.id == cart)
            .ok_or(CartsServiceError::NotFound)?;

        update.apply(record);

        let updated = record.clone();

        self.store.save_carts(&carts).await?;

        Ok(updated)
    }

    async fn delete_cart(&self, cart: Uuid) -> Result<(), CartsServiceError> {
        let mut carts = self.store.load_carts().await?;
        let count = carts.len();

        carts.retain(|record| record.id != cart);

        if carts.len() == count {
            return Err(CartsServiceError::NotFound);
        }

        self.store.save_carts(&carts).await?;

        info!(cart = %cart, "deleted cart");

        Ok(())
    }

    async fn add_access(&self, cart: Uuid, access: NewAccess) -> Result<Access, CartsServiceError> {
        let mut carts = self.store.load_carts().await?;

        let record = carts
            .iter_mut()
            .find(|record| record.id == cart)
            .ok_or(CartsServiceError::NotFound)?;

        if record.access_for(&access.user_id).is_some() {
            return Err(CartsServiceError::DuplicateAccess);
        }

        let granted = Access {
            user_id: access.user_id,
            permission: access.permission,
            added_at: Timestamp::now(),
        };

        record.accesses.push(granted.clone());

        self.store.save_carts(&carts).await?;

        Ok(granted)
    }

    async fn update_access(
        &self,
        cart: Uuid,
        user_id: String,
        permission: String,
    ) -> Result<Access, CartsServiceError> {
        let mut carts = self.store.load_carts().await?;

        let record = carts
            .iter_mut()
            .find(|record| record.id == cart)
            .ok_or(CartsServiceError::NotFound)?;

        let access = record
            .accesses
            .iter_mut()
            .find(|access| access.user_id == user_id)
            .ok_or(CartsServiceError::AccessNotFound)?;

        access.permission = permission;

        let updated = access.clone();

        self.store.save_carts(&carts).await?;

        Ok(updated)
    }

    async fn remove_access(&self, cart: Uuid, user_id: String) -> Result<(), CartsServiceError> {
        let mut carts = self.store.load_carts().await?;

        let record = carts
            .iter_mut()
            .find(|record| record.id == cart)
            .ok_or(CartsServiceError::NotFound)?;

        let count = record.accesses.len();

        record.accesses.retain(|access| access.user_id != user_id);

        if record.accesses.len() == count {
            return Err(CartsServiceError::AccessNotFound);
        }

        self.store.save_carts(&carts).await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// All carts, in storage order.
    async fn list_carts(&self) -> Result<Vec<Cart>, CartsServiceError>;

    /// Retrieve a single cart.
    async fn get_cart(&self, cart: Uuid) -> Result<Cart, CartsServiceError>;

    /// Create a cart whose drawers are copied from the current default
    /// stock.
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError>;

    /// Merge the provided fields into an existing cart.
    async fn update_cart(&self, cart: Uuid, update: CartUpdate) -> Result<Cart, CartsServiceError>;

    /// Delete a cart by id.
    async fn delete_cart(&self, cart: Uuid) -> Result<(), CartsServiceError>;

    /// Grant a user access to a cart. At most one grant per user.
    async fn add_access(&self, cart: Uuid, access: NewAccess) -> Result<Access, CartsServiceError>;

    /// Change the permission on an existing grant.
    async fn update_access(
        &self,
        cart: Uuid,
        user_id: String,
        permission: String,
    ) -> Result<Access, CartsServiceError>;

    /// Remove a user's grant from a cart.
    async fn remove_access(&self, cart: Uuid, user_id: String) -> Result<(), CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crashcart::status::CartStatus;

    use crate::test::{TestContext, sample_template};

    use super::*;

    fn new_cart(name: &str, location: &str) -> NewCart {
        NewCart {
            name: name.to_string(),
            location: location.to_string(),
            status: Some(CartStatus::Closed),
        }
    }

    #[tokio::test]
    async fn create_cart_copies_the_current_template() -> TestResult {
        let ctx = TestContext::new();

        ctx.store.save_template(&sample_template()).await?;

        let cart = ctx
            .carts
            .create_cart(new_cart("Carrinho 5A", "5º andar"))
            .await?;

        assert_eq!(cart.drawers, sample_template().drawers);
        assert_eq!(cart.status, Some(CartStatus::Closed));

        Ok(())
    }

    #[tokio::test]
    async fn created_cart_does_not_follow_later_template_edits() -> TestResult {
        let ctx = TestContext::new();

        ctx.store.save_template(&sample_template()).await?;

        let cart = ctx
            .carts
            .create_cart(new_cart("Carrinho 5A", "5º andar"))
            .await?;

        let mut template = sample_template();

        template.drawers[0].items[0].quantity = 99;

        ctx.store.save_template(&template).await?;

        let stored = ctx.carts.get_cart(cart.id).await?;

        assert_eq!(stored.drawers[0].items[0].quantity, 10);

        Ok(())
    }

    #[tokio::test]
    async fn create_cart_rejects_blank_required_fields() {
        let ctx = TestContext::new();

        let result = ctx.carts.create_cart(new_cart("", "5º andar")).await;

        assert!(
            matches!(result, Err(CartsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );

        let result = ctx.carts.create_cart(new_cart("Carrinho", "   ")).await;

        assert!(
            matches!(result, Err(CartsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_cart_unknown_id_returns_not_found() {
        let ctx = TestContext::new();

        let result = ctx.carts.get_cart(Uuid::now_v7()).await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_cart_merges_only_provided_fields() -> TestResult {
        let ctx = TestContext::new();

        let cart = ctx
            .carts
            .create_cart(new_cart("Carrinho 5A", "5º andar"))
            .await?;

        let updated = ctx
            .carts
            .update_cart(
                cart.id,
                CartUpdate {
                    status: Some(CartStatus::Open),
                    ..CartUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.status, Some(CartStatus::Open));
        assert_eq!(updated.name, "Carrinho 5A");
        assert_eq!(updated.location, "5º andar");

        Ok(())
    }

    #[tokio::test]
    async fn delete_cart_makes_it_not_found() -> TestResult {
        let ctx = TestContext::new();

        let cart = ctx
            .carts
            .create_cart(new_cart("Carrinho 5A", "5º andar"))
            .await?;

        ctx.carts.delete_cart(cart.id).await?;

        let result = ctx.carts.get_cart(cart.id).await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_access_is_rejected_and_set_unchanged() -> TestResult {
        let ctx = TestContext::new();

        let cart = ctx
            .carts
            .create_cart(new_cart("Carrinho 5A", "5º andar"))
            .await?;

        ctx.carts
            .add_access(
                cart.id,
                NewAccess {
                    user_id: "ana".to_string(),
                    permission: "edit".to_string(),
                },
            )
            .await?;

        let result = ctx
            .carts
            .add_access(
                cart.id,
                NewAccess {
                    user_id: "ana".to_string(),
                    permission: "view".to_string(),
                },
            )
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::DuplicateAccess)),
            "expected DuplicateAccess, got {result:?}"
        );

        let stored = ctx.carts.get_cart(cart.id).await?;

        assert_eq!(stored.accesses.len(), 1);
        assert_eq!(stored.accesses[0].permission, "edit");

        Ok(())
    }

    #[tokio::test]
    async fn update_access_changes_the_permission() -> TestResult {
        let ctx = TestContext::new();

        let cart = ctx
            .carts
            .create_cart(new_cart("Carrinho 5A", "5º andar"))
            .await?;

        ctx.carts
            .add_access(
                cart.id,
                NewAccess {
                    user_id: "ana".to_string(),
                    permission: "view".to_string(),
                },
            )
            .await?;

        let updated = ctx
            .carts
            .update_access(cart.id, "ana".to_string(), "edit".to_string())
            .await?;

        assert_eq!(updated.permission, "edit");

        Ok(())
    }

    #[tokio::test]
    async fn update_access_unknown_user_returns_access_not_found() -> TestResult {
        let ctx = TestContext::new();

        let cart = ctx
            .carts
            .create_cart(new_cart("Carrinho 5A", "5º andar"))
            .await?;

        let result = ctx
            .carts
            .update_access(cart.id, "ninguem".to_string(), "edit".to_string())
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::AccessNotFound)),
            "expected AccessNotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn remove_access_deletes_the_grant() -> TestResult {
        let ctx = TestContext::new();

        let cart = ctx
            .carts
            .create_cart(new_cart("Carrinho 5A", "5º andar"))
            .await?;

        ctx.carts
            .add_access(
                cart.id,
                NewAccess {
                    user_id: "ana".to_string(),
                    permission: "view".to_string(),
                },
            )
            .await?;

        ctx.carts.remove_access(cart.id, "ana".to_string()).await?;

        let stored = ctx.carts.get_cart(cart.id).await?;

        assert!(stored.accesses.is_empty());

        Ok(())
    }
}
