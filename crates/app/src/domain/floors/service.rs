//! Floor board service.
//!
//! Holds the in-memory board the wall display reads: a snapshot of each
//! floor's carts plus its rotation position. The snapshot is process-local
//! and lost on restart; refreshing it from storage rebuilds every rotation
//! from scratch.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::Mutex;
use tracing::info;

use crashcart::{
    carts::Cart,
    floors::{FLOOR_COUNT, display_name, floor_status, group_by_floor},
    rotation::Rotation,
    status::next_status,
};

use crate::domain::{
    carts::{CartsService, data::CartUpdate},
    floors::{
        errors::FloorsServiceError,
        models::{DisplayedCart, FloorView},
    },
};

#[derive(Debug, Clone)]
struct FloorSlot {
    carts: Vec<Cart>,
    rotation: Rotation,
}

pub struct BoardFloorsService {
    carts: Arc<dyn CartsService>,
    floor_count: usize,
    board: Mutex<Vec<FloorSlot>>,
}

impl BoardFloorsService {
    /// Board over the default floor count.
    #[must_use]
    pub fn new(carts: Arc<dyn CartsService>) -> Self {
        Self::with_floor_count(carts, FLOOR_COUNT)
    }

    /// Board over an explicit floor count.
    #[must_use]
    pub fn with_floor_count(carts: Arc<dyn CartsService>, floor_count: usize) -> Self {
        Self {
            carts,
            floor_count,
            board: Mutex::new(empty_board(floor_count)),
        }
    }
}

fn empty_board(floor_count: usize) -> Vec<FloorSlot> {
    (0..floor_count)
        .map(|_| FloorSlot {
            carts: Vec::new(),
            rotation: Rotation::new(0),
        })
        .collect()
}

fn view(floor: usize, slot: &FloorSlot) -> FloorView {
    let carts: Vec<&Cart> = slot.carts.iter().collect();

    FloorView {
        floor,
        status: floor_status(&carts),
        display_name: display_name(&carts),
        cart_count: slot.carts.len(),
        displayed: slot
            .carts
            .get(slot.rotation.current())
            .map(|cart| DisplayedCart {
                id: cart.id,
                name: cart.name.clone(),
                status: cart.status,
            }),
    }
}

fn views(board: &[FloorSlot]) -> Vec<FloorView> {
    board
        .iter()
        .enumerate()
        .map(|(index, slot)| view(index + 1, slot))
        .collect()
}

#[async_trait]
impl FloorsService for BoardFloorsService {
    async fn board(&self) -> Vec<FloorView> {
        let board = self.board.lock().await;

        views(&board)
    }

    async fn refresh(&self) -> Result<Vec<FloorView>, FloorsServiceError> {
        let carts = self.carts.list_carts().await?;

        let slots: Vec<FloorSlot> = group_by_floor(&carts, self.floor_count)
            .into_iter()
            .map(|floor_carts| {
                let carts: Vec<Cart> = floor_carts.into_iter().cloned().collect();

                FloorSlot {
                    rotation: Rotation::new(carts.len()),
                    carts,
                }
            })
            .collect();

        let mut board = self.board.lock().await;

        *board = slots;

        info!(carts = carts.len(), "refreshed floor board");

        Ok(views(&board))
    }

    async fn tick(&self) {
        let mut board = self.board.lock().await;

        for slot in board.iter_mut() {
            slot.rotation.advance();
        }
    }

    async fn cycle_status(&self, floor: usize) -> Result<Cart, FloorsServiceError> {
        let target = {
            let board = self.board.lock().await;

            let slot = floor
                .checked_sub(1)
                .and_then(|index| board.get(index))
                .ok_or(FloorsServiceError::UnknownFloor)?;

            slot.carts
                .first()
                .cloned()
                .ok_or(FloorsServiceError::EmptyFloor)?
        };

        let next = next_status(target.status);

        let updated = self
            .carts
            .update_cart(
                target.id,
                CartUpdate {
                    status: Some(next),
                    ..CartUpdate::default()
                },
            )
            .await?;

        // Mirror the persisted change on the board without a full refresh,
        // so in-progress rotations keep their position.
        let mut board = self.board.lock().await;

        if let Some(slot) = floor.checked_sub(1).and_then(|index| board.get_mut(index)) {
            if let Some(cart) = slot.carts.iter_mut().find(|cart| cart.id == updated.id) {
                cart.status = updated.status;
            }
        }

        info!(cart = %updated.id, status = ?updated.status, "cycled cart status");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait FloorsService: Send + Sync {
    /// The current board snapshot, one view per floor.
    async fn board(&self) -> Vec<FloorView>;

    /// Reload carts from storage, regroup them and restart every rotation.
    async fn refresh(&self) -> Result<Vec<FloorView>, FloorsServiceError>;

    /// Advance every multi-cart floor's rotation one position.
    async fn tick(&self);

    /// Advance the floor's first cart along the status cycle and persist
    /// the new status.
    async fn cycle_status(&self, floor: usize) -> Result<Cart, FloorsServiceError>;
}
