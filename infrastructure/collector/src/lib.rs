pub mod client;
pub mod product_catalog;
pub mod retry;
pub mod sale_submitter;
#[cfg(test)]
mod test_server;
