mod generates_sample_prompt_contract;
mod reads_csv_records_contract;
mod reads_document_records_contract;
mod rejects_bad_birth_date_contract;
mod rejects_invalid_config_contract;
mod rejects_invalid_template_contract;
mod rejects_missing_config_contract;
mod reports_no_patient_contract;
