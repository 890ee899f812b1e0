//! Network interface trait
//!
//! Covers both the wired (ethernet) and wireless (wifi) boards; the panel
//! only needs link state and the two addresses.

use core::net::Ipv4Addr;

/// Hardware (MAC) address
pub type MacAddress = [u8; 6];

/// Trait for the board's network interface
pub trait NetworkInterface {
    /// Check whether the link is up (cable connected / associated)
    fn link_up(&mut self) -> bool;

    /// Get the local IPv4 address
    fn local_address(&mut self) -> Ipv4Addr;

    /// Get the interface hardware address
    fn hardware_address(&mut self) -> MacAddress;
}
