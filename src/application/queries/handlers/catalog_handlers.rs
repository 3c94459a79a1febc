//! Catalog Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    PersonRecord, PersonRepositoryPort, PlanetRecord, PlanetRepositoryPort,
};
use crate::application::queries::{GetPerson, GetPlanet, ListPeople, ListPlanets};

// ============================================================================
// People
// ============================================================================

/// GetPerson Handler
pub struct GetPersonHandler {
    person_repo: Arc<dyn PersonRepositoryPort>,
}

impl GetPersonHandler {
    pub fn new(person_repo: Arc<dyn PersonRepositoryPort>) -> Self {
        Self { person_repo }
    }

    pub async fn handle(&self, query: GetPerson) -> Result<PersonRecord, ApplicationError> {
        self.person_repo
            .find_by_id(query.person_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Person", query.person_id))
    }
}

/// ListPeople Handler
pub struct ListPeopleHandler {
    person_repo: Arc<dyn PersonRepositoryPort>,
}

impl ListPeopleHandler {
    pub fn new(person_repo: Arc<dyn PersonRepositoryPort>) -> Self {
        Self { person_repo }
    }

    pub async fn handle(&self, _query: ListPeople) -> Result<Vec<PersonRecord>, ApplicationError> {
        Ok(self.person_repo.find_all().await?)
    }
}

// ============================================================================
// Planets
// ============================================================================

/// GetPlanet Handler
pub struct GetPlanetHandler {
    planet_repo: Arc<dyn PlanetRepositoryPort>,
}

impl GetPlanetHandler {
    pub fn new(planet_repo: Arc<dyn PlanetRepositoryPort>) -> Self {
        Self { planet_repo }
    }

    pub async fn handle(&self, query: GetPlanet) -> Result<PlanetRecord, ApplicationError> {
        self.planet_repo
            .find_by_id(query.planet_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Planet", query.planet_id))
    }
}

/// ListPlanets Handler
pub struct ListPlanetsHandler {
    planet_repo: Arc<dyn PlanetRepositoryPort>,
}

impl ListPlanetsHandler {
    pub fn new(planet_repo: Arc<dyn PlanetRepositoryPort>) -> Self {
        Self { planet_repo }
    }

    pub async fn handle(&self, _query: ListPlanets) -> Result<Vec<PlanetRecord>, ApplicationError> {
        Ok(self.planet_repo.find_all().await?)
    }
}
