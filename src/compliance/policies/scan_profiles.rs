/// A selectable value with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOption {
    pub label: &'static str,
    pub value: &'static str,
}

const fn option(label: &'static str, value: &'static str) -> ScanOption {
    ScanOption { label, value }
}

/// SCAP datastream files shipped with the scan document
const OS_CONTENT: &[ScanOption] = &[
    option("Amazon Linux 2", "ssg-amzn2-ds.xml"),
    option("Red Hat Enterprise Linux 7", "ssg-rhel7-ds.xml"),
];

/// XCCDF profiles offered for selection
const BENCHMARKS: &[ScanOption] = &[
    option(
        "DISA STIG",
        "xccdf_org.ssgproject.content_profile_stig-rhel7-disa",
    ),
    option("C2S", "xccdf_org.ssgproject.content_profile_C2S"),
    option(
        "CSCF RHEL6 MLS Core Baseline",
        "xccdf_org.ssgproject.content_profile_CSCF-RHEL6-MLS",
    ),
    option(
        "PCI-DSS v3 Control Baseline",
        "xccdf_org.ssgproject.content_profile_pci-dss",
    ),
    option(
        "Standard System Security",
        "xccdf_org.ssgproject.content_profile_standard",
    ),
    option(
        "United States Government Configuration Baseline (USGCB)",
        "xccdf_org.ssgproject.content_profile_usgcb-rhel6-server",
    ),
    option(
        "Server Baseline",
        "xccdf_org.ssgproject.content_profile_server",
    ),
    option(
        "Red Hat Corporate Profile for Certified Cloud Providers (RH CCP)",
        "xccdf_org.ssgproject.content_profile_rht-ccp",
    ),
    option(
        "CNSSI 1253 Low/Low/Low Control Baseline",
        "xccdf_org.ssgproject.content_profile_nist-CL-IL-AL",
    ),
    option(
        "FTP Server Profile (vsftpd)",
        "xccdf_org.ssgproject.content_profile_ftp-server",
    ),
    option(
        "FISMA Medium",
        "xccdf_org.ssgproject.content_profile_fisma-medium-rhel6-server",
    ),
    option(
        "Desktop Baseline",
        "xccdf_org.ssgproject.content_profile_desktop",
    ),
];

/// ScanProfiles policy listing the known OS content and benchmark profiles
///
/// The orchestrator accepts any non-empty identifier; this list drives the
/// `profiles` command and a warning for identifiers outside the known set.
pub struct ScanProfiles;

impl ScanProfiles {
    pub fn os_content() -> &'static [ScanOption] {
        OS_CONTENT
    }

    pub fn benchmarks() -> &'static [ScanOption] {
        BENCHMARKS
    }

    pub fn is_known_os(value: &str) -> bool {
        OS_CONTENT.iter().any(|o| o.value == value)
    }

    pub fn is_known_benchmark(value: &str) -> bool {
        BENCHMARKS.iter().any(|b| b.value == value)
    }
}
