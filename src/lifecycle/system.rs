use crate::auth::{self, AccountClient, SessionProvider};
use crate::clients::{
    CouponClient, DishClient, OrderClient, OrderItemClient, ProfileClient, RestaurantClient,
    TrackingClient,
};
use crate::config::SystemConfig;
use crate::order_actor::OrderContext;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Clients for every application table, plus the configuration the views read.
///
/// Cheap to clone; each view keeps its own copy.
#[derive(Clone)]
pub struct Backend {
    pub profiles: ProfileClient,
    pub restaurants: RestaurantClient,
    pub dishes: DishClient,
    pub coupons: CouponClient,
    pub orders: OrderClient,
    pub order_items: OrderItemClient,
    pub tracking: TrackingClient,
    pub config: SystemConfig,
}

/// The running system: every table actor plus the clients to reach them.
///
/// # Example
///
/// ```ignore
/// let system = FoodSystem::new();
/// let session = system.session_provider();
/// let alice = session.sign_up(form).await?;
/// let dashboard = Dashboard::open(&alice, system.backend()).await?;
/// // ...
/// drop((session, dashboard));
/// system.shutdown().await?;
/// ```
pub struct FoodSystem {
    backend: Backend,
    accounts: AccountClient,
    handles: Vec<JoinHandle<()>>,
}

impl Default for FoodSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodSystem {
    /// Starts the system with configuration read from the environment.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::from_env())
    }

    pub fn with_config(config: SystemConfig) -> Self {
        // 1. Create actors
        let (account_actor, accounts) = auth::new(&config);
        let (profile_actor, profiles) = crate::profile_actor::new(&config);
        let (restaurant_actor, restaurants) = crate::restaurant_actor::new(&config);
        let (dish_actor, dishes) = crate::dish_actor::new(&config);
        let (coupon_actor, coupons) = crate::coupon_actor::new(&config);
        let (order_item_actor, order_items) = crate::order_item_actor::new(&config);
        let (tracking_actor, tracking) = crate::tracking_actor::new(&config);
        let (order_actor, orders) = crate::order_actor::new(&config);

        // 2. Start them with their dependencies injected
        let order_context = OrderContext {
            restaurants: restaurants.clone(),
            items: order_items.clone(),
            tracking: tracking.clone(),
        };
        let handles = vec![
            tokio::spawn(account_actor.run(())),
            tokio::spawn(profile_actor.run(())),
            tokio::spawn(restaurant_actor.run(profiles.clone())),
            tokio::spawn(dish_actor.run(())),
            tokio::spawn(coupon_actor.run(())),
            tokio::spawn(order_item_actor.run(())),
            tokio::spawn(tracking_actor.run(())),
            tokio::spawn(order_actor.run(order_context)),
        ];
        info!(tables = handles.len(), environment = %config.environment, "System started");

        Self {
            backend: Backend {
                profiles,
                restaurants,
                dishes,
                coupons,
                orders,
                order_items,
                tracking,
                config,
            },
            accounts,
            handles,
        }
    }

    /// Table clients for building views.
    pub fn backend(&self) -> Backend {
        self.backend.clone()
    }

    /// A fresh, signed-out session for one client of the system.
    pub fn session_provider(&self) -> SessionProvider {
        SessionProvider::new(
            self.accounts.clone(),
            self.backend.profiles.clone(),
            self.backend.config.min_password_len,
        )
    }

    /// Drops the system's clients and waits for every table actor to stop.
    ///
    /// Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Closing the last sender of a table ends its actor loop. Actors holding other tables'
        // clients in their context release them as they stop.
        drop(self.backend);
        drop(self.accounts);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
