use dewey_ebooks::AppConfig;
use figment::Jail;

#[test]
fn test_defaults_without_sources() {
    Jail::expect_with(|_jail| {
        let config: AppConfig = AppConfig::figment().extract()?;

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.resources.pdf_base, "https://drive.google.com/drive/folders/");
        assert_eq!(config.support.contact_url, "https://t.me/DrHelloWorld");
        Ok(())
    });
}

#[test]
fn test_yaml_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.yaml",
            r#"
server:
  port: 8080
resources:
  flipbook_base: "https://flip.test/"
"#,
        )?;

        let config: AppConfig = AppConfig::figment().extract()?;

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.resources.flipbook_base, "https://flip.test/");
        assert_eq!(config.resources.pdf_base, "https://drive.google.com/drive/folders/");
        Ok(())
    });
}

#[test]
fn test_environment_overrides_yaml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.yaml", "resources:\n  pdf_base: \"https://yaml.test/\"\n")?;
        jail.set_env("APP_RESOURCES__PDF_BASE", "https://env.test/");
        jail.set_env("APP_SUPPORT__CONTACT_URL", "https://support.test/");

        let config: AppConfig = AppConfig::figment().extract()?;

        assert_eq!(config.resources.pdf_base, "https://env.test/");
        assert_eq!(config.support.contact_url, "https://support.test/");
        Ok(())
    });
}
