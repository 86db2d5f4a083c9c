pub mod modules {
    pub mod fsb_events {
        pub mod core {
            pub mod category;
            pub mod decision;
            pub mod event;
            pub mod market_ref_type;
            pub mod ports;
        }
        pub mod application {
            pub mod command_handler;
            pub mod errors;
            pub mod query_handler;
        }
        pub mod use_cases {
            pub mod add_event {
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod complete_event {
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod attach_market_ref_type {
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_market_ref_type {
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod filter_events {
                pub mod query;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod dump_full_structure {
                pub mod render;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod client;
                pub mod graphql;
            }
            pub mod outbound {
                pub mod event_catalog_in_memory;
            }
        }
    }
}

pub mod shell;
