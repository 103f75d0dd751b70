//! Address Decode Tables.
//!
//! Every interesting boundary of the 32-bit address space, checked against
//! the file it selects and the address that file is shown.

use clic_core::regmap::{BaseAddress, BusSignals, FileId, Route, decode, route};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(0x0000, FileId::Cfg, 0x0000)]
#[case(0x0003, FileId::Cfg, 0x0003)]
#[case(0x0004, FileId::Info, 0x0004)]
#[case(0x003F, FileId::Info, 0x003F)]
#[case(0x0040, FileId::IntTrig, 0x0040)]
#[case(0x00BC, FileId::IntTrig, 0x00BC)]
#[case(0x0FFF, FileId::IntTrig, 0x0FFF)]
#[case(0x1000, FileId::IntIp, 0x0000)]
#[case(0x1001, FileId::IntIe, 0x0000)]
#[case(0x1002, FileId::IntAttr, 0x0000)]
#[case(0x1003, FileId::IntCtl, 0x0000)]
#[case(0x1008, FileId::IntIp, 0x0008)]
#[case(0x100A, FileId::IntAttr, 0x0008)]
#[case(0x4FFF, FileId::IntCtl, 0x3FFC)]
#[case(0xFFFF_FFFF, FileId::IntCtl, 0xFFFF_EFFC)]
fn test_decode_table(#[case] addr: u32, #[case] file: FileId, #[case] local: u32) {
    assert_eq!(
        decode(addr),
        Route {
            file,
            address: local
        }
    );
}

#[test]
fn test_route_drives_only_the_selected_file() {
    let (selected, ports) = route(BusSignals::write(0x1005, 0xAB));
    assert_eq!(selected.file, FileId::IntIe);
    for id in FileId::ALL {
        let port = ports[id.index()];
        if id == FileId::IntIe {
            assert_eq!(port, BusSignals::write(0x4, 0xAB));
        } else {
            assert_eq!(port, BusSignals::IDLE, "{id} should be idle");
        }
    }
}

#[test]
fn test_route_forwards_reset() {
    let (_, ports) = route(BusSignals::reset(0x0044));
    assert!(ports[FileId::IntTrig.index()].reset);
    assert_eq!(ports[FileId::IntTrig.index()].address, 0x44);
}

#[test]
fn test_writable_bases_exclude_clicinfo() {
    assert!(!BaseAddress::WRITABLE.contains(&BaseAddress::Clicinfo));
    assert_eq!(BaseAddress::WRITABLE.len(), BaseAddress::ALL.len() - 1);
}

#[rstest]
#[case(BaseAddress::Cliccfg, 0x0000)]
#[case(BaseAddress::Clicinfo, 0x0004)]
#[case(BaseAddress::Clicinttrig, 0x0040)]
#[case(BaseAddress::Clicintip, 0x1000)]
#[case(BaseAddress::Clicintie, 0x1001)]
#[case(BaseAddress::Clicintattr, 0x1002)]
#[case(BaseAddress::Clicintctl, 0x1003)]
fn test_base_address_values(#[case] base: BaseAddress, #[case] value: u32) {
    assert_eq!(base.value(), value);
}

#[test]
fn test_file_names() {
    let names: Vec<_> = FileId::ALL.iter().map(|f| f.to_string()).collect();
    assert_eq!(
        names,
        [
            "cliccfg",
            "clicinfo",
            "clicinttrig",
            "clicintip",
            "clicintie",
            "clicintattr",
            "clicintctl"
        ]
    );
}
