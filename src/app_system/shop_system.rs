use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::app_system::Config;
use crate::clients::{CartClient, ProductClient};
use crate::domain::{Cart, Product};
use crate::file_store::JsonFileStore;
use crate::routes::AppState;

/// The main application system that owns both collection actors.
///
/// Responsible for starting the actors over their data files, handing out
/// clients, and waiting for the actors on shutdown.
pub struct ShopSystem {
    pub product_client: ProductClient,
    pub cart_client: CartClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    pub fn new(config: &Config) -> Self {
        info!(data_dir = %config.data_dir.display(), "Starting shop system");

        // 1. Product collection
        let product_store = JsonFileStore::<Product>::new(config.products_path());
        let (product_actor, product_resource_client) =
            ResourceActor::new("products", config.channel_capacity, product_store);
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        // 2. Cart collection
        let cart_store = JsonFileStore::<Cart>::new(config.carts_path());
        let (cart_actor, cart_resource_client) =
            ResourceActor::new("carts", config.channel_capacity, cart_store);
        let cart_client = CartClient::new(cart_resource_client);
        let cart_handle = tokio::spawn(cart_actor.run());

        Self {
            product_client,
            cart_client,
            handles: vec![product_handle, cart_handle],
        }
    }

    /// Router state sharing this system's clients.
    pub fn state(&self) -> AppState {
        AppState {
            products: self.product_client.clone(),
            carts: self.cart_client.clone(),
        }
    }

    /// Drops this system's clients and waits for the actors to drain.
    ///
    /// Actors stop once every client clone is gone, so the router built from
    /// [`state`](Self::state) has to be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.product_client);
        drop(self.cart_client);

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
