// Shell for the devices bounded context: route table and shared state.
// Config reading and wiring live in main.rs.

pub mod http;
pub mod state;
