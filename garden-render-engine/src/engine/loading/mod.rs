pub mod manifest_loader;
