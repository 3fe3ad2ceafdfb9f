use std::net::Ipv4Addr;

use proptest::prelude::*;

use crate::device::DeviceConfiguration;
use crate::service::ServiceRecord;
use crate::types::Protocol;

fn any_protocol() -> impl Strategy<Value = Protocol> {
    prop_oneof![
        Just(Protocol::Mrp),
        Just(Protocol::Dmap),
        Just(Protocol::AirPlay),
    ]
}

fn any_services() -> impl Strategy<Value = Vec<(Protocol, Option<String>)>> {
    proptest::collection::vec(
        (any_protocol(), proptest::option::of("[a-z]{1,4}")),
        0..8,
    )
}

fn build(services: &[(Protocol, Option<String>)]) -> DeviceConfiguration {
    let mut config = DeviceConfiguration::new(Ipv4Addr::LOCALHOST, "test");
    for (protocol, identifier) in services {
        config.add_service(ServiceRecord::new(*protocol, identifier.clone()));
    }
    config
}

proptest! {
    #[test]
    fn test_one_service_per_protocol(services in any_services()) {
        let config = build(&services);

        for protocol in Protocol::ALL {
            let count = config.services().iter().filter(|s| s.protocol() == protocol).count();
            let expected = usize::from(services.iter().any(|(p, _)| *p == protocol));
            prop_assert_eq!(count, expected);
        }
    }

    #[test]
    fn test_ready_matches_connectable_services(services in any_services()) {
        let config = build(&services);
        let expected = config.get_service(Protocol::Mrp).is_some()
            || config.get_service(Protocol::Dmap).is_some();

        prop_assert_eq!(config.ready(), expected);
        prop_assert_eq!(config.main_service(None).is_ok(), expected);
    }

    #[test]
    fn test_main_service_prefers_mrp(services in any_services()) {
        let config = build(&services);

        if let Ok(service) = config.main_service(None) {
            let expected = if config.has_service(Protocol::Mrp) {
                Protocol::Mrp
            } else {
                Protocol::Dmap
            };
            prop_assert_eq!(service.protocol(), expected);
        }
    }

    #[test]
    fn test_identifier_is_first_registered_by_priority(services in any_services()) {
        let config = build(&services);

        // The first record added for a protocol keeps its identifier
        let first_id = |protocol: Protocol| {
            services
                .iter()
                .find(|(p, _)| *p == protocol)
                .and_then(|(_, id)| id.clone())
        };
        let expected = Protocol::ALL.into_iter().find_map(first_id);

        prop_assert_eq!(config.identifier().map(str::to_string), expected);
    }
}
