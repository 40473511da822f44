pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod key_value_storage;
        pub mod notifier;
    }
}

pub mod modules {
    pub mod cart {
        pub mod cart_manager;
        pub mod core {
            pub mod cart;
            pub mod decide;
            pub mod decision;
            pub mod product;
            pub mod stock;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod add_product {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod remove_product {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_product_amount {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod view_cart {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod drain_notifications {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod cart_store;
                pub mod catalog;
            }
        }
    }
}

pub mod shell;
