mod http_tests;
mod organizations_tests;
mod passwordless_tests;
mod portal_tests;
mod users_tests;
