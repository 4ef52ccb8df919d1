use crate::changelog::{
    Changelog,
    tests::common::{CHANGELOG_HTML, RELEASE_TAG},
};

#[test]
fn collects_every_accessor() {
    let changelog = Changelog::new(RELEASE_TAG, CHANGELOG_HTML);
    let metadata = changelog.metadata();

    assert_eq!(metadata.release_tag, RELEASE_TAG);
    assert_eq!(metadata.previous_release_tag, changelog.previous_release_tag());
    assert_eq!(metadata.coreos, changelog.coreos_version());
    assert_eq!(metadata.kubernetes.as_deref(), Some("1.29.2"));
    assert_eq!(metadata.repositories.map(|r| r.len()), Some(2));
    assert_eq!(metadata.pull_requests.map(|p| p.len()), Some(3));
}

#[test]
fn accessors_are_repeatable() {
    let changelog = Changelog::new(RELEASE_TAG, CHANGELOG_HTML);

    assert_eq!(
        changelog.previous_release_tag(),
        changelog.previous_release_tag()
    );
    assert_eq!(changelog.coreos_version(), changelog.coreos_version());
    assert_eq!(changelog.kubernetes_version(), changelog.kubernetes_version());
    assert_eq!(changelog.repositories(), changelog.repositories());
    assert_eq!(
        changelog.pull_request_report(),
        changelog.pull_request_report()
    );
    assert_eq!(changelog.metadata(), changelog.metadata());
}

#[test]
fn degrades_to_empty_results_for_unstructured_input() {
    let changelog = Changelog::new(RELEASE_TAG, "<<not really html>> & </p>");
    let metadata = changelog.metadata();

    assert_eq!(changelog.release_tag(), RELEASE_TAG);
    assert!(metadata.previous_release_tag.is_none());
    assert!(metadata.coreos.is_none());
    assert!(metadata.kubernetes.is_none());
    assert!(metadata.repositories.is_none());
    assert!(metadata.pull_requests.is_none());
}

#[test]
fn serializes_to_json() {
    let changelog = Changelog::new(RELEASE_TAG, CHANGELOG_HTML);
    let json = serde_json::to_value(changelog.metadata()).unwrap();

    assert_eq!(json["coreos"]["kind"], "upgraded");
    assert_eq!(json["coreos"]["current"]["version"], "416.94.202404301731-0");
    assert_eq!(json["repositories"][1]["name"], "machine-config-operator");
    assert_eq!(json["pull_requests"][1]["bug_url"], serde_json::Value::Null);
}
