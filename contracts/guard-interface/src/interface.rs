//! Interface identifiers recognised by guards.
//!
//! Ids are the 4-byte selectors used by Safe guards on EVM chains, kept
//! byte-for-byte so off-chain tooling can reuse the same constants.

use soroban_sdk::BytesN;

/// Generic interface-discovery marker (ERC-165 `supportsInterface`).
pub const ERC165_INTERFACE_ID: [u8; 4] = [0x01, 0xff, 0xc9, 0xa7];

/// Transaction guard marker. A Safe refuses to install a guard that does not
/// report this id.
pub const GUARD_INTERFACE_ID: [u8; 4] = [0xe6, 0xd7, 0xa8, 0x3a];

/// Every id a conforming guard answers `true` for.
pub const SUPPORTED_INTERFACES: [[u8; 4]; 2] = [ERC165_INTERFACE_ID, GUARD_INTERFACE_ID];

/// Looks `interface_id` up in [`SUPPORTED_INTERFACES`].
pub fn supports(interface_id: &BytesN<4>) -> bool {
    let id = interface_id.to_array();
    SUPPORTED_INTERFACES.iter().any(|known| *known == id)
}
