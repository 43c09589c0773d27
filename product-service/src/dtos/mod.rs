mod products;

pub use products::{
    product_body, CreateProductPayload, UpdateProductPayload, INVALID_PRODUCT_DATA,
};
