mod cache;
mod client;
mod local_refresher;
mod remote_refresher;

pub use cache::AdminClientCache;
pub use client::{AdminClient, AdminClientConnector, HttpAdminClientConnector};
pub use local_refresher::LocalMountTableRefresher;
pub use remote_refresher::RemoteMountTableRefresher;
