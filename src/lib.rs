pub mod shared {
    pub mod core {
        pub mod email;
    }
    pub mod http;
}

pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod state;
        }
        pub mod use_cases {
            pub mod sign_up_for_activity {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_activities {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod roster_store;
                pub mod roster_store_in_memory;
            }
        }
        pub mod seed;
    }
}

pub mod shell;
