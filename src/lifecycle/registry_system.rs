use crate::clients::{ProductClient, UserClient};
use crate::config::RegistryConfig;
use tracing::{error, info};

/// Owns the running registry actors.
///
/// `RegistrySystem` is responsible for:
/// - **Lifecycle Management**: starting both actors and stopping them again
/// - **Seeding**: preloading demo products and users when the config enables it
///
/// The product and user registries are independent, so both actors run with an
/// empty context (`()`).
///
/// # Example
///
/// ```ignore
/// let system = RegistrySystem::new(&RegistryConfig::default());
///
/// let soap = system.product_client.find_by_code("prod1").await?;
///
/// system.shutdown().await?;
/// ```
pub struct RegistrySystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Client for interacting with the User actor
    pub user_client: UserClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RegistrySystem {
    /// Spawns the product and user actors on the current Tokio runtime.
    pub fn new(config: &RegistryConfig) -> Self {
        let (product_actor, product_client) = crate::product_actor::new(config);
        let (user_actor, user_client) = crate::user_actor::new(config);

        let product_handle = tokio::spawn(product_actor.run(()));
        let user_handle = tokio::spawn(user_actor.run(()));

        Self {
            product_client,
            user_client,
            handles: vec![product_handle, user_handle],
        }
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping the clients closes the request channels; each actor drains what is
    /// already queued and then leaves its loop. Clones handed out elsewhere (for
    /// example to the HTTP router) must be dropped first or this waits for them.
    ///
    /// Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down registries...");

        drop(self.product_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Registry shutdown complete.");
        Ok(())
    }
}
