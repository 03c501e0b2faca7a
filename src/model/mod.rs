/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
/// HTTP request pipeline
pub mod http;
/// Option structs of the resource operations
pub mod options;
/// Request side models: query parameters, pagination and per call configuration
pub mod requests;
/// Response side models shared by every resource
pub mod responses;
