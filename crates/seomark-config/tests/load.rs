#![allow(clippy::expect_used, reason = "Expect is acceptable in tests")]

use std::fs;

use seomark_config::Config;
use tempfile::tempdir;

#[test]
fn test_load_merges_files_in_order() {
  let temp_dir = tempdir().expect("tempdir");
  let base_path = temp_dir.path().join("base.toml");
  let override_path = temp_dir.path().join("override.json");

  fs::write(
    &base_path,
    r#"
default_description = "Base description"

[branding]
app_name = "MyApp"
base_url = "https://myapp.io"
twitter_handle = "@myapp"

[meta.tags]
author = "MyApp Team"
"#,
  )
  .expect("write base config");

  fs::write(
    &override_path,
    r#"{
  "branding": { "base_url": "https://staging.myapp.io" },
  "default_robots": "noindex",
  "meta": { "tags": { "theme-color": "black" } }
}"#,
  )
  .expect("write override config");

  let config = Config::load(&[base_path, override_path], &[])
    .expect("load merged config");

  assert_eq!(config.branding.app_name, "MyApp");
  assert_eq!(config.branding.base_url, "https://staging.myapp.io");
  assert_eq!(config.branding.twitter_handle(), "@myapp");
  assert_eq!(config.default_description.as_deref(), Some("Base description"));
  assert_eq!(config.default_robots, "noindex");

  let tags = config.meta.and_then(|m| m.tags).expect("meta tags");
  assert_eq!(tags.len(), 2);
  assert_eq!(tags.get_index(0).map(|(k, _)| k.as_str()), Some("author"));
}

#[test]
fn test_load_applies_overrides_then_validates() {
  let temp_dir = tempdir().expect("tempdir");
  let path = temp_dir.path().join("seomark.toml");
  fs::write(&path, "[branding]\napp_name = \"MyApp\"\n").expect("write");

  // base_url is missing until the override supplies it
  assert!(Config::load(&[path.clone()], &[]).is_err());

  let config = Config::load(&[path], &[
    "branding.base_url=https://myapp.io".to_string(),
  ])
  .expect("load with override");
  assert_eq!(config.branding.base_url, "https://myapp.io");
}

#[test]
fn test_from_file_rejects_unknown_extension() {
  let temp_dir = tempdir().expect("tempdir");
  let path = temp_dir.path().join("seomark.yaml");
  fs::write(&path, "branding: {}").expect("write");

  let err = Config::from_file(&path).expect_err("yaml is unsupported");
  assert!(err.to_string().contains("Unsupported config file format"));
}

#[test]
fn test_default_templates_parse() {
  let temp_dir = tempdir().expect("tempdir");

  for format in ["toml", "json"] {
    let path = temp_dir.path().join(format!("seomark.{format}"));
    Config::generate_default_config(format, &path).expect("generate");
    let config = Config::from_file(&path).expect("parse generated config");
    assert_eq!(config.branding.app_name, "My App");
    config.validate().expect("generated config is valid");
  }
}
