#![allow(dead_code)]

pub mod aeroprofit_env;
pub mod mock_service;
