//! Shared fixtures for changelog tests.

pub const RELEASE_TAG: &str = "4.16.0-0.nightly-2024-05-01-111315";

/// Changelog page shaped like the release controller output.
pub const CHANGELOG_HTML: &str = r#"
<html>
<head><title>Release 4.16.0-0.nightly-2024-05-01-111315</title></head>
<body>
  <h1>4.16.0-0.nightly-2024-05-01-111315</h1>
  <p>Created: 2024-05-01 11:13:15 +0000 UTC</p>
  <h2>Changes from <a href="/releasestream/4.16.0-0.nightly/release/4.16.0-0.nightly-2024-04-30-053518">4.16.0-0.nightly-2024-04-30-053518</a></h2>
  <h3>Components</h3>
  <ul>
    <li>Kubernetes 1.29.2</li>
    <li>Red Hat Enterprise Linux CoreOS upgraded from <a href="https://releases-rhcos-art.apps.ocp-virt.prod.psi.redhat.com/?release=416.94.202404291600-0">416.94.202404291600-0</a> to <a href="https://releases-rhcos-art.apps.ocp-virt.prod.psi.redhat.com/?release=416.94.202404301731-0">416.94.202404301731-0</a> (<a href="https://releases-rhcos-art.apps.ocp-virt.prod.psi.redhat.com/diff.html?first_release=416.94.202404291600-0&amp;second_release=416.94.202404301731-0">diff</a>)</li>
  </ul>
  <h2>Rebuilt images without code change</h2>
  <ul><li>azure-file-csi-driver-operator</li></ul>
  <h3><a href="https://github.com/openshift/cluster-network-operator/tree/a1b2c3d">cluster-network-operator</a></h3>
  <ul>
    <li><a href="https://github.com/openshift/cluster-network-operator/pull/2301">#2301</a>: Bump OVN to 24.03 <a href="https://issues.redhat.com/browse/OCPBUGS-32111">OCPBUGS-32111</a></li>
    <li><a href="https://github.com/openshift/cluster-network-operator/pull/2305">#2305</a>: Fix egress IP reconciliation</li>
    <li><a href="https://github.com/openshift/cluster-network-operator/compare/f00ba47...a1b2c3d">Full changelog</a></li>
  </ul>
  <h3><a href="https://github.com/openshift/machine-config-operator/tree/e4f5a6b">machine-config-operator</a></h3>
  <ul>
    <li><a href="https://github.com/openshift/machine-config-operator/pull/4321">#4321</a>: Drop legacy kubelet flags <a href="https://bugzilla.redhat.com/show_bug.cgi?id=2001234">Bug 2001234</a></li>
    <li><a href="https://github.com/openshift/machine-config-operator/compare/0ddba11...e4f5a6b">Full changelog</a></li>
  </ul>
</body>
</html>
"#;

/// Repository section heading and list for `name` with the given list items.
pub fn repository_section(name: &str, items: &[String]) -> String {
    let items = items
        .iter()
        .map(|item| format!("<li>{item}</li>"))
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        r#"<h3><a href="https://github.com/openshift/{name}/tree/abc">{name}</a></h3>
<ul>
{items}
</ul>"#
    )
}

/// List item content for a pull request in repository `repo`.
pub fn pull_request_item(
    repo: &str,
    number: usize,
    description: &str,
) -> String {
    format!(
        r#"<a href="https://github.com/openshift/{repo}/pull/{number}">#{number}</a>: {description}"#
    )
}
