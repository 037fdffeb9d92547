pub mod mock_collaborators;

pub use mock_collaborators::{
    MockAdminClientCache, MockMountTableRefresher, MockPeerDirectory, RefreshBehavior,
};
