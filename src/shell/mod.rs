// Composition root for the fsb_events bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory catalog and wire it into the command and query handlers.
// - Expose the handlers over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
