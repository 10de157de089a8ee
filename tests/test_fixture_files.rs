use test_utils::constants::TEST_FILES_DIRECTORY;
use test_utils::{list_test_files, run_test_for_file};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_for_all_fixture_files() {
        println!("Testing word frequency fixtures...");

        let files = list_test_files(&TEST_FILES_DIRECTORY);
        let total_files = files.len();
        assert!(total_files > 0, "No fixture files found");

        for (file_idx, file_path) in files.iter().enumerate() {
            println!(
                "   -- {:?} ({} of {})",
                file_path,
                file_idx + 1,
                total_files
            );

            run_test_for_file(file_path);
        }
    }
}
