/// Network adapters for remote lookup sources
mod http_lookup_client;
mod routing_loader;

pub use http_lookup_client::HttpLookupClient;
pub use routing_loader::RoutingLookupLoader;
