use tracing::info;

use super::ClassService;
use crate::errors::Result;
use crate::models::classes::{entities::Class, requests::CreateClassDto};

pub async fn create_class(service: &ClassService, dto: CreateClassDto) -> Result<Class> {
    let class = service.storage().create_class(dto).await?;
    info!("Class {} created successfully", class.id);
    Ok(class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::memory;

    #[actix_web::test]
    async fn test_create_class() {
        let service = ClassService::new(memory());
        let class = service
            .create_class(CreateClassDto { name: "Math".into() })
            .await
            .unwrap();
        assert_eq!(class.name, "Math");
        assert!(!class.id.is_empty());
    }
}
