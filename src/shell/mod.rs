// Composition root for the activities service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the roster store and wire it into the use case handlers.
// - Compose the HTTP router, the GraphQL schema, and static asset serving.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
