/// Default host of the WorkOS API
pub const DEFAULT_API_HOSTNAME: &str = "api.workos.com";
/// User agent string used in HTTP requests to identify this client to the WorkOS API
pub const USER_AGENT: &str = concat!("workos-rust/", env!("CARGO_PKG_VERSION"));
/// Content type declared on every request
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// Response header carrying the correlation identifier of a request
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";
/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "WORKOS_API_KEY";
/// Environment variable overriding the API hostname
pub const API_HOSTNAME_ENV: &str = "WORKOS_API_HOSTNAME";
/// Environment variable toggling HTTPS (`true` / `false`)
pub const HTTPS_ENV: &str = "WORKOS_HTTPS";
/// Environment variable overriding the port
pub const PORT_ENV: &str = "WORKOS_PORT";
/// Environment variable setting a request timeout in seconds
pub const TIMEOUT_SECS_ENV: &str = "WORKOS_TIMEOUT_SECS";
/// Grant type sent when exchanging an authorization code
pub const GRANT_TYPE_AUTHORIZATION_CODE: &str = "authorization_code";
/// Grant type sent when authenticating with email and password
pub const GRANT_TYPE_PASSWORD: &str = "password";
/// Grant type sent when authenticating with a magic auth code
pub const GRANT_TYPE_MAGIC_AUTH: &str = "urn:workos:oauth:grant-type:magic-auth:code";
