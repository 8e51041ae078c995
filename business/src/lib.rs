pub mod application {
    pub mod alert {
        pub mod check;
        pub mod get_keys;
    }
    pub mod item {
        pub mod clear_all;
        pub mod create;
        pub mod delete;
        pub mod get_all;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod alert {
        pub mod deduplicator;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod check;
            pub mod get_keys;
        }
    }
    pub mod item {
        pub mod classifier;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod clear_all;
            pub mod create;
            pub mod delete;
            pub mod get_all;
        }
    }
}
