/// MCP serving surface
///
/// JSON-RPC over stdin/stdout. This layer mediates between external clients
/// and the state containers; the containers themselves know nothing about it.

pub mod protocol;
pub mod server;

pub use server::McpServer;
