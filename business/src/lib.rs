pub mod application {
    pub mod clock;
    pub mod cart {
        pub mod add;
        pub mod clear;
        pub mod decrement;
        pub mod get;
        pub mod increment;
        pub mod remove;
        pub mod set_quantity;
    }
    pub mod checkout {
        pub mod checkout;
        pub mod scheduler;
    }
    pub mod product {
        pub mod get_all;
    }
    pub mod sale {
        pub mod get_last;
        pub mod resend_last;
    }
    #[cfg(test)]
    pub(crate) mod test_support;
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod navigation;
    pub mod shared {
        pub mod clock;
        pub mod value_objects;
    }
    pub mod product {
        pub mod catalog;
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod clear;
            pub mod decrement;
            pub mod get;
            pub mod increment;
            pub mod remove;
            pub mod set_quantity;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod gate;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod checkout;
        }
    }
    pub mod sale {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod get_last;
            pub mod resend_last;
        }
    }
}
