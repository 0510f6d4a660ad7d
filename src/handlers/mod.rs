pub mod orders;
pub mod products;

use crate::application::store_service::StoreService;
use crate::infrastructure::store_repo::DieselStoreRepository;

/// The service instance shared by all handlers through `web::Data`.
pub type AppService = StoreService<DieselStoreRepository>;
