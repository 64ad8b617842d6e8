pub mod project_record;
