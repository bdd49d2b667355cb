use std::fs;
use std::path::Path;

use name_rewrite::prelude::*;
use name_rewrite::workflow::OperationType;
use tempfile::TempDir;

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yaml");
        fs::write(&config_path, body).unwrap();
        config_path
    }

    fn touch(directory: &Path, name: &str) {
        fs::write(directory.join(name), name).unwrap();
    }

    fn setup() -> (TempDir, TempDir) {
        let config_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        touch(output_dir.path(), "app.yml.j2");
        touch(output_dir.path(), "db.yml.jinja2");
        touch(output_dir.path(), "notes.txt");
        (config_dir, output_dir)
    }

    #[test]
    fn test_dry_run_plans_without_touching_files() {
        let (config_dir, output_dir) = setup();
        let config_path = write_config(
            &config_dir,
            &format!(
                "directory: '{}'\nreplace:\n  regex_find: '\\.j(inja)?2$'\n  regex_replace: ''\n",
                output_dir.path().display()
            ),
        );

        let context = process_files(ProcessingOptions {
            config_path,
            dry_run: true,
        })
        .unwrap();

        assert_eq!(context.stats.files_scanned, 3);
        assert_eq!(context.stats.files_unchanged, 1);
        assert_eq!(context.planned_operations.len(), 2);
        assert!(context
            .planned_operations
            .iter()
            .all(|operation| operation.operation_type == OperationType::Move));

        assert!(output_dir.path().join("app.yml.j2").exists());
        assert!(!output_dir.path().join("app.yml").exists());
    }

    #[test]
    fn test_move_renames_files() {
        let (config_dir, output_dir) = setup();
        let config_path = write_config(
            &config_dir,
            &format!(
                "directory: '{}'\nreplace:\n  regex_find: '\\.j(inja)?2$'\n  regex_replace: ''\n",
                output_dir.path().display()
            ),
        );

        let context = process_files(ProcessingOptions {
            config_path,
            dry_run: false,
        })
        .unwrap();

        assert_eq!(context.stats.files_renamed, 2);
        assert_eq!(context.stats.errors, 0);
        assert!(context.planned_operations.is_empty());

        let app = output_dir.path().join("app.yml");
        assert!(app.exists());
        assert_eq!(fs::read_to_string(app).unwrap(), "app.yml.j2");
        assert!(output_dir.path().join("db.yml").exists());
        assert!(!output_dir.path().join("app.yml.j2").exists());
        assert!(output_dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_copy_keeps_sources_and_suffix_stripping() {
        let (config_dir, output_dir) = setup();
        let config_path = write_config(
            &config_dir,
            &format!(
                "directory: '{}'\ncopy: true\nsuffix_remove: true\ninclude: '*.j2'\nreplace:\n  find: app\n  replace: service\n",
                output_dir.path().display()
            ),
        );

        let context = process_files(ProcessingOptions {
            config_path,
            dry_run: false,
        })
        .unwrap();

        assert_eq!(context.stats.files_scanned, 1);
        assert_eq!(context.stats.files_copied, 1);
        assert!(output_dir.path().join("app.yml.j2").exists());
        assert!(output_dir.path().join("service.yml").exists());
        assert!(output_dir.path().join("db.yml.jinja2").exists());
    }

    #[test]
    fn test_existing_destination_is_counted_as_error() {
        let (config_dir, output_dir) = setup();
        touch(output_dir.path(), "app.yml");
        let config_path = write_config(
            &config_dir,
            &format!(
                "directory: '{}'\nreplace:\n  regex_find: '\\.j2$'\n  regex_replace: ''\n",
                output_dir.path().display()
            ),
        );

        let context = process_files(ProcessingOptions {
            config_path,
            dry_run: false,
        })
        .unwrap();

        assert_eq!(context.stats.errors, 1);
        assert_eq!(fs::read_to_string(output_dir.path().join("app.yml")).unwrap(), "app.yml");
        assert!(output_dir.path().join("app.yml.j2").exists());
    }

    #[test]
    fn test_invalid_replace_settings_abort() {
        let (config_dir, output_dir) = setup();
        let config_path = write_config(
            &config_dir,
            &format!(
                "directory: '{}'\nreplace:\n  find: a\n  repl: b\n",
                output_dir.path().display()
            ),
        );

        let result = process_files(ProcessingOptions {
            config_path,
            dry_run: false,
        });

        assert!(result.is_err());
        assert!(output_dir.path().join("app.yml.j2").exists());
    }

    #[test]
    fn test_chained_rename_aborts_before_touching_files() {
        let config_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        touch(output_dir.path(), "a");
        touch(output_dir.path(), "aa");
        let config_path = write_config(
            &config_dir,
            &format!(
                "directory: '{}'\nreplace:\n  find: a\n  replace: aa\n",
                output_dir.path().display()
            ),
        );

        let result = process_files(ProcessingOptions {
            config_path,
            dry_run: false,
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(output_dir.path().join("a")).unwrap(), "a");
        assert_eq!(fs::read_to_string(output_dir.path().join("aa")).unwrap(), "aa");
        assert!(!output_dir.path().join("aaaa").exists());
    }

    #[test]
    fn test_rename_leaving_directory_aborts() {
        let (config_dir, output_dir) = setup();
        let config_path = write_config(
            &config_dir,
            &format!(
                "directory: '{}'\nreplace:\n  find: app\n  replace: ../app\n",
                output_dir.path().display()
            ),
        );

        let result = process_files(ProcessingOptions {
            config_path,
            dry_run: false,
        });

        assert!(result.is_err());
        assert!(output_dir.path().join("app.yml.j2").exists());
    }

    #[test]
    fn test_no_replace_settings_changes_nothing() {
        let (config_dir, output_dir) = setup();
        let config_path = write_config(
            &config_dir,
            &format!("directory: '{}'\n", output_dir.path().display()),
        );

        let context = process_files(ProcessingOptions {
            config_path,
            dry_run: false,
        })
        .unwrap();

        assert_eq!(context.stats.files_scanned, 3);
        assert_eq!(context.stats.files_unchanged, 3);
        assert_eq!(context.stats.files_renamed, 0);
    }
}
