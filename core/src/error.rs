/// Everything that can go wrong servicing a bus or memory-bank access.
///
/// Every fallible [Bus](crate::Bus)/[MemoryBank](crate::MemoryBank) operation returns one of
/// these instead of panicking; `Sm83::exec_m_cycle` propagates them up to the host unchanged,
/// logging at `error` level before returning (see the `log` calls at each call site).
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BusError {
    /// A bank-local offset (or the absolute address that routed to it) fell outside the bank's
    /// length.
    #[error("address {0:#06x} out of bounds")]
    AddressOutOfBounds(u16),

    /// A write landed on a read-only bank.
    #[error("write to read-only bank at {0:#06x}")]
    ReadOnlyViolation(u16),

    /// No bank is connected at the given absolute address.
    #[error("no bank connected at address {0:#06x}")]
    NoBankAtAddress(u16),

    /// The decoder reached an opcode this core doesn't implement.
    #[error("unimplemented opcode {0:#04x} ({1})")]
    UnimplementedOpcode(u8, &'static str),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn address_out_of_bounds_formats_as_hex() {
        assert_eq!("address 0x1234 out of bounds", BusError::AddressOutOfBounds(0x1234).to_string());
    }

    #[test]
    fn read_only_violation_formats_as_hex() {
        assert_eq!(
            "write to read-only bank at 0x0000",
            BusError::ReadOnlyViolation(0x0000).to_string()
        );
    }

    #[test]
    fn no_bank_at_address_formats_as_hex() {
        assert_eq!(
            "no bank connected at address 0xffff",
            BusError::NoBankAtAddress(0xFFFF).to_string()
        );
    }

    #[test]
    fn unimplemented_opcode_includes_mnemonic() {
        assert_eq!(
            "unimplemented opcode 0xcb (PREFIX CB)",
            BusError::UnimplementedOpcode(0xCB, "PREFIX CB").to_string()
        );
    }
}
