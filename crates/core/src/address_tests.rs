// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[parameterized(
    ten_low = { "10.0.0.0" },
    ten_high = { "10.255.255.255" },
    rfc1918_172_low = { "172.16.0.0" },
    rfc1918_172_high = { "172.31.255.255" },
    rfc1918_192 = { "192.168.1.1" },
    rfc1918_192_low = { "192.168.0.0" },
    rfc1918_192_high = { "192.168.255.255" },
    loopback_low = { "127.0.0.0" },
    loopback = { "127.0.0.1" },
    loopback_high = { "127.255.255.254" },
    link_local_low = { "169.254.0.0" },
    link_local = { "169.254.0.1" },
    link_local_high = { "169.254.255.255" },
    cloud_metadata = { "169.254.169.254" },
    cgnat_low = { "100.64.0.0" },
    cgnat_high = { "100.127.255.255" },
    alibaba_metadata = { "100.100.100.200" },
    ietf_protocol_low = { "192.0.0.0" },
    ietf_protocol = { "192.0.0.8" },
    ietf_protocol_high = { "192.0.0.255" },
    test_net_1_low = { "192.0.2.0" },
    test_net_1 = { "192.0.2.1" },
    test_net_1_high = { "192.0.2.255" },
    test_net_2_low = { "198.51.100.0" },
    test_net_2 = { "198.51.100.7" },
    test_net_2_high = { "198.51.100.255" },
    test_net_3_low = { "203.0.113.0" },
    test_net_3 = { "203.0.113.9" },
    test_net_3_high = { "203.0.113.255" },
    reserved_low = { "240.0.0.0" },
    reserved = { "240.0.0.1" },
    broadcast = { "255.255.255.255" },
    local_multicast_low = { "224.0.0.0" },
    local_multicast = { "224.0.0.1" },
    local_multicast_high = { "224.0.0.255" },
)]
fn private_v4(addr: &str) {
    assert!(is_private_ip(ip(addr)), "{addr} should be private");
}

#[parameterized(
    before_ten = { "9.255.255.255" },
    after_ten = { "11.0.0.0" },
    before_172 = { "172.15.255.255" },
    after_172 = { "172.32.0.0" },
    before_192_168 = { "192.167.255.255" },
    after_192_168 = { "192.169.0.0" },
    before_loopback = { "126.255.255.255" },
    after_loopback = { "128.0.0.0" },
    before_link_local = { "169.253.255.255" },
    before_ietf_protocol = { "191.255.255.255" },
    after_ietf_protocol = { "192.0.1.0" },
    before_test_net_1 = { "192.0.1.255" },
    after_test_net_1 = { "192.0.3.0" },
    before_test_net_2 = { "198.51.99.255" },
    after_test_net_2 = { "198.51.101.0" },
    before_test_net_3 = { "203.0.112.255" },
    before_local_multicast = { "223.255.255.255" },
    after_local_multicast = { "224.0.1.0" },
    before_cgnat = { "100.63.255.255" },
    after_cgnat = { "100.128.0.0" },
    after_link_local = { "169.255.0.0" },
    public_dns = { "8.8.8.8" },
    cloudflare = { "1.1.1.1" },
    global_multicast = { "224.0.1.1" },
    admin_multicast = { "239.255.255.250" },
    before_reserved = { "239.255.255.255" },
    unspecified = { "0.0.0.0" },
    after_test_net_3 = { "203.0.114.0" },
)]
fn public_v4(addr: &str) {
    assert!(!is_private_ip(ip(addr)), "{addr} should not be private");
}

#[parameterized(
    loopback = { "::1" },
    unique_local_fc = { "fc00::1" },
    unique_local_fd = { "fd12:3456::1" },
    aws_metadata = { "fd00:ec2::254" },
    link_local = { "fe80::1" },
    link_local_top = { "febf::1" },
    multicast_link_local = { "ff02::1" },
    mapped_private = { "::ffff:10.0.0.1" },
    mapped_loopback = { "::ffff:127.0.0.1" },
)]
fn private_v6(addr: &str) {
    assert!(is_private_ip(ip(addr)), "{addr} should be private");
}

#[parameterized(
    unspecified = { "::" },
    documentation = { "2001:db8::1" },
    google_dns = { "2001:4860:4860::8888" },
    site_local_boundary = { "fec0::1" },
    multicast_global = { "ff0e::1" },
    mapped_public = { "::ffff:8.8.8.8" },
)]
fn public_v6(addr: &str) {
    assert!(!is_private_ip(ip(addr)), "{addr} should not be private");
}

#[parameterized(
    gcp_aws = { "169.254.169.254", true },
    alibaba = { "100.100.100.200", true },
    aws_v6 = { "fd00:ec2::254", true },
    mapped = { "::ffff:169.254.169.254", true },
    neighbour = { "169.254.169.253", false },
    public = { "8.8.8.8", false },
)]
fn metadata_addresses(addr: &str, expected: bool) {
    assert_eq!(is_metadata_ip(ip(addr)), expected);
}
