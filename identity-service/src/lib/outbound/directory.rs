pub mod memory;

pub use memory::InMemoryCredentialDirectory;
