/// Generic troubleshooting checklist that quotes the error text verbatim.
pub fn fallback_guidance(error_text: &str) -> String {
    format!(
        "No known error pattern matched:\n\n{error_text}\n\n\
         Things to check:\n\
         1. Read the first line of the stack trace and the file it points to.\n\
         2. Confirm installed package versions match the documentation version you are using.\n\
         3. Check configuration values and environment variables the failing code reads.\n\
         4. Verify the service or hook named in the error is registered.\n\
         5. Reproduce with debug logging enabled and search the docs for the exact message."
    )
}
