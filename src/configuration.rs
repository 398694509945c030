use std::cell::{
    Ref,
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;

use log::{
    info,
    warn
};
use serde::Deserialize;

use crate::integrand::integrandmanager::{
    IntegrandManager,
    IntegrandManagerGenerator
};
use crate::integration::integrationerror::IntegrationError;
use crate::integration::job::IntegrationJob;
use crate::manager::manager::IManager;
use crate::manager::managererror::ManagerError;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    integrand: Vec<serde_json::Value>,
    #[serde(default)]
    job: Vec<serde_json::Value>
}

pub struct JobOutcome {
    name: String,
    result: Result<f64, IntegrationError>
}

impl JobOutcome {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn result(&self) -> &Result<f64, IntegrationError> {
        &self.result
    }
}

pub struct Configuration {
    integrand_manager_cell: RefCell<IntegrandManager>,
    jobs_cell: RefCell<Vec<IntegrationJob>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            integrand_manager_cell: RefCell::new(IntegrandManagerGenerator::new()),
            jobs_cell: RefCell::new(Vec::new())
        }
    }

    pub fn integrand_manager(&self) -> RefMut<'_, IntegrandManager> {
        self.integrand_manager_cell.borrow_mut()
    }

    pub fn jobs(&self) -> Ref<'_, Vec<IntegrationJob>> {
        self.jobs_cell.borrow()
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.from_json_value(json_value)?;
        info!("loaded configuration from {}", file_path);
        Ok(())
    }

    /// Loads integrands and jobs. Every entry is parsed before anything is
    /// registered, so a failed load leaves the configuration unchanged.
    pub fn from_json_value(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        let new_jobs = json_prop
            .job
            .into_iter()
            .map(ManagerError::from_json_or_json_parse_error::<IntegrationJob>)
            .collect::<Result<Vec<IntegrationJob>, ManagerError>>()?;
        let staged = IntegrandManagerGenerator::new();
        staged.insert_obj_from_json_vec(&json_prop.integrand)?;

        let integrand_manager = self.integrand_manager();
        for (name, integrand) in staged.map().drain() {
            integrand_manager.insert(&name, integrand);
        }
        let mut jobs = self.jobs_cell.borrow_mut();
        let job_count = new_jobs.len();
        jobs.extend(new_jobs);
        info!("{} integrands and {} jobs registered", json_prop.integrand.len(), job_count);
        Ok(())
    }

    /// Runs every registered job in order. A failing job does not stop the
    /// ones after it.
    pub fn run_jobs(&self) -> Vec<JobOutcome> {
        let integrand_manager = self.integrand_manager_cell.borrow();
        self.jobs()
            .iter()
            .map(|job| {
                let result = job.run(&integrand_manager);
                if let Err(error) = &result {
                    warn!("job '{}' failed: {}", job.name(), error);
                }
                JobOutcome { name: job.name().to_owned(), result }
            })
            .collect()
    }

    pub fn run_job(&self, name: &str) -> Result<f64, ManagerError> {
        let jobs = self.jobs();
        let job = jobs
            .iter()
            .find(|job| job.name() == name)
            .ok_or_else(|| ManagerError::map_elem_not_found(name))?;
        let integrand_manager = self.integrand_manager_cell.borrow();
        Ok(job.run(&integrand_manager)?)
    }
}
