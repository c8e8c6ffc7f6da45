#![doc = include_str!("../README.md")]

pub mod api;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod pool;

pub use api::ComputeApi;
pub use client::{AsyncComputeClient, CompletionHandler, FnHandler};
pub use config::ClientConfig;
pub use credentials::{
    ChainProvider, Credentials, EnvProvider, ProvideCredentials, StaticProvider,
};
pub use error::{Error, Result, ServiceFault};
pub use pool::{TaskHandle, TaskPool};
