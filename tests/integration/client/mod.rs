//! Desktop client HTTP layer tests

mod api_client_test;
