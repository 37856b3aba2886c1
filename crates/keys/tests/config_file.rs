use ygg_keys::{merge_into_config, Error, Keypair};

#[tokio::test(flavor = "current_thread")]
async fn test_merge_rewrites_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("yggdrasil.conf");
    std::fs::write(&path, "{\n  PublicKey: old\n  Peers: []\n}\n")?;

    let keys = Keypair::new("P1", "K1");
    merge_into_config(&keys, &path).await?;
    assert_eq!(
        std::fs::read_to_string(&path)?,
        "{\n  PublicKey: K1\n  Peers: []\n}\n  PrivateKey: P1\n"
    );

    // Second run leaves a single field of each kind
    merge_into_config(&keys, &path).await?;
    let content = std::fs::read_to_string(&path)?;
    assert_eq!(content.matches("PublicKey:").count(), 1);
    assert_eq!(content.matches("PrivateKey:").count(), 1);
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn test_missing_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing.conf");

    let result = merge_into_config(&Keypair::new("P1", "K1"), &path).await;
    assert!(matches!(result, Err(Error::ReadConfig { path: p, .. }) if p == path));
    assert!(!path.exists());
    Ok(())
}
