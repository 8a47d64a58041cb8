pub mod deploy_file;
