pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get;
        pub mod remove_item;
        pub mod sync;
        pub mod update_quantity;
    }
    pub mod category {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_slug;
        pub mod update;
    }
    pub mod favorite {
        pub mod add;
        pub mod get_all;
        pub mod remove;
    }
    pub mod order {
        pub mod create;
        pub mod get_by_id;
        pub mod get_user_orders;
        pub mod update_status;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_category;
        pub mod get_by_id;
        pub mod search;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
            pub mod remove_item;
            pub mod sync;
            pub mod update_quantity;
        }
    }
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_slug;
            pub mod update;
        }
    }
    pub mod favorite {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod get_all;
            pub mod remove;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod pricing;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod get_by_id;
            pub mod get_user_orders;
            pub mod update_status;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_category;
            pub mod get_by_id;
            pub mod search;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod money;
        pub mod pagination;
        pub mod value_objects;
    }
}
