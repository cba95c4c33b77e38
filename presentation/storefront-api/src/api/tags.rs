use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Products,
    Cart,
    Checkout,
    Sales,
    Navigation,
}
