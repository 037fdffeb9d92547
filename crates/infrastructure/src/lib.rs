//! Routegrid Infrastructure Layer
pub mod admin;
pub mod directory;

pub use admin::{
    AdminClient, AdminClientCache, AdminClientConnector, HttpAdminClientConnector,
    LocalMountTableRefresher, RemoteMountTableRefresher,
};
pub use directory::StaticPeerDirectory;
