pub mod config;

pub mod shared {
    pub mod infrastructure {
        pub mod record_store;
    }
}

pub mod modules {
    pub mod devices {
        pub mod core {
            pub mod device;
            pub mod event;
        }
        pub mod use_cases {
            pub mod register_device {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod add_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_device_events {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
