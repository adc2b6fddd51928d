use uuid::Uuid;

use gardenist::garden::{ApiError, GardenService, NewBed, NewHarvest, NewPlant, PlantStatus, Season};
use gardenist::storage::LocalStorage;
use gardenist::utils::datetime;

async fn service() -> GardenService {
    let storage = LocalStorage::new(true).await.expect("in-memory storage");
    GardenService::new(storage)
}

fn new_plant(name: &str, bed_uuid: Uuid) -> NewPlant {
    NewPlant {
        name: name.to_string(),
        variety: None,
        bed_uuid,
        quantity: 1,
        space_required: 1,
        planting_date: None,
        season: None,
        expected_harvest_date: None,
        notes: None,
    }
}

#[tokio::test]
async fn test_create_and_list_beds() {
    let service = service().await;

    let bed = service
        .create_bed(NewBed {
            name: "North Bed".to_string(),
            dimensions: "4x8".to_string(),
            notes: Some("raised".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(bed.name, "North Bed");
    assert_eq!(bed.plant_count, 0);

    let beds = service.get_beds().await.unwrap();
    assert_eq!(beds.len(), 1);
    assert_eq!(beds[0].dimensions, "4x8");
}

#[tokio::test]
async fn test_create_bed_requires_name_and_dimensions() {
    let service = service().await;

    let err = service
        .create_bed(NewBed {
            name: "  ".to_string(),
            dimensions: "4x8".to_string(),
            notes: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidData(_)));

    let err = service
        .create_bed(NewBed {
            name: "Bed".to_string(),
            dimensions: String::new(),
            notes: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidData(_)));
}

#[tokio::test]
async fn test_create_plant_requires_existing_bed() {
    let service = service().await;

    let err = service.create_plant(new_plant("Tomato", Uuid::new_v4())).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn test_create_plant_fills_defaults() {
    let service = service().await;
    let bed = service
        .create_bed(NewBed {
            name: "Bed".to_string(),
            dimensions: "4x4".to_string(),
            notes: None,
        })
        .await
        .unwrap();

    let plant = service.create_plant(new_plant("Tomato", bed.uuid)).await.unwrap();
    assert_eq!(plant.status, PlantStatus::Planted);
    assert_eq!(plant.planting_date, datetime::format_today());
    assert_eq!(plant.year, datetime::current_year());
    assert_eq!(plant.season, Season::current());

    let beds = service.get_beds().await.unwrap();
    assert_eq!(beds[0].plant_count, 1);
}

#[tokio::test]
async fn test_status_advances_through_lifecycle() {
    let service = service().await;
    let bed = service
        .create_bed(NewBed {
            name: "Bed".to_string(),
            dimensions: "4x4".to_string(),
            notes: None,
        })
        .await
        .unwrap();
    let plant = service.create_plant(new_plant("Beans", bed.uuid)).await.unwrap();

    let expected = [
        PlantStatus::Sprouted,
        PlantStatus::Flowering,
        PlantStatus::Harvesting,
        PlantStatus::Finished,
    ];
    for status in expected {
        let updated = service.advance_plant_status(&plant.uuid).await.unwrap();
        assert_eq!(updated.status, status);
    }

    // Finished is terminal
    let err = service.advance_plant_status(&plant.uuid).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidData(_)));
}

#[tokio::test]
async fn test_status_cannot_skip_stages() {
    let service = service().await;
    let bed = service
        .create_bed(NewBed {
            name: "Bed".to_string(),
            dimensions: "4x4".to_string(),
            notes: None,
        })
        .await
        .unwrap();
    let plant = service.create_plant(new_plant("Kale", bed.uuid)).await.unwrap();

    let err = service
        .set_plant_status(&plant.uuid, PlantStatus::Harvesting)
        .await
        .unwrap_err();
    match err {
        ApiError::InvalidData(message) => {
            assert!(message.contains("Invalid status transition"));
            assert!(message.contains("planted"));
        }
        other => panic!("expected InvalidData, got {other:?}"),
    }
}

#[tokio::test]
async fn test_record_and_list_harvests() {
    let service = service().await;
    let bed = service
        .create_bed(NewBed {
            name: "Bed".to_string(),
            dimensions: "4x4".to_string(),
            notes: None,
        })
        .await
        .unwrap();
    let plant = service.create_plant(new_plant("Zucchini", bed.uuid)).await.unwrap();

    let harvest = service
        .record_harvest(NewHarvest {
            plant_uuid: plant.uuid,
            quantity: 2.5,
            unit: "kg".to_string(),
            notes: None,
        })
        .await
        .unwrap();
    assert_eq!(harvest.unit, "kg");
    assert_eq!(harvest.harvest_date, datetime::format_today());

    let harvests = service.get_harvests_for_plant(&plant.uuid).await.unwrap();
    assert_eq!(harvests.len(), 1);

    let recent = service.get_recent_harvests(10).await.unwrap();
    assert_eq!(recent.len(), 1);
}

#[tokio::test]
async fn test_record_harvest_validations() {
    let service = service().await;

    let err = service
        .record_harvest(NewHarvest {
            plant_uuid: Uuid::new_v4(),
            quantity: 1.0,
            unit: "kg".to_string(),
            notes: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    let bed = service
        .create_bed(NewBed {
            name: "Bed".to_string(),
            dimensions: "4x4".to_string(),
            notes: None,
        })
        .await
        .unwrap();
    let plant = service.create_plant(new_plant("Peas", bed.uuid)).await.unwrap();

    let err = service
        .record_harvest(NewHarvest {
            plant_uuid: plant.uuid,
            quantity: 0.0,
            unit: "kg".to_string(),
            notes: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidData(_)));
}

#[tokio::test]
async fn test_get_bed_with_plants_and_update_notes() {
    let service = service().await;
    let bed = service
        .create_bed(NewBed {
            name: "Herbs".to_string(),
            dimensions: "2x4".to_string(),
            notes: None,
        })
        .await
        .unwrap();
    service.create_plant(new_plant("Basil", bed.uuid)).await.unwrap();
    service.create_plant(new_plant("Thyme", bed.uuid)).await.unwrap();

    let (loaded, plants) = service.get_bed_with_plants(&bed.uuid).await.unwrap();
    assert_eq!(loaded.name, "Herbs");
    assert_eq!(loaded.plant_count, 2);
    assert_eq!(plants.len(), 2);

    service
        .update_bed_notes(&bed.uuid, Some("partial shade".to_string()))
        .await
        .unwrap();
    let (loaded, _) = service.get_bed_with_plants(&bed.uuid).await.unwrap();
    assert_eq!(loaded.notes.as_deref(), Some("partial shade"));

    let err = service.get_bed_with_plants(&Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn test_attach_and_list_plant_images() {
    let service = service().await;
    let bed = service
        .create_bed(NewBed {
            name: "Bed".to_string(),
            dimensions: "4x4".to_string(),
            notes: None,
        })
        .await
        .unwrap();
    let plant = service.create_plant(new_plant("Pumpkin", bed.uuid)).await.unwrap();

    let image = service
        .attach_plant_image(&plant.uuid, "https://example.com/pumpkin.jpg", Some("first sprout".to_string()))
        .await
        .unwrap();
    assert_eq!(image.taken_date, datetime::format_today());

    let images = service.get_plant_images(&plant.uuid).await.unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].url, "https://example.com/pumpkin.jpg");

    let err = service
        .attach_plant_image(&plant.uuid, "   ", None)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidData(_)));

    let err = service
        .attach_plant_image(&Uuid::new_v4(), "https://example.com/x.jpg", None)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_bed_cascades_to_plants() {
    let service = service().await;
    let bed = service
        .create_bed(NewBed {
            name: "Bed".to_string(),
            dimensions: "4x4".to_string(),
            notes: None,
        })
        .await
        .unwrap();
    service.create_plant(new_plant("Carrot", bed.uuid)).await.unwrap();

    service.delete_bed(&bed.uuid).await.unwrap();

    assert!(service.get_beds().await.unwrap().is_empty());
    assert!(service.get_plants().await.unwrap().is_empty());

    let err = service.delete_bed(&bed.uuid).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn test_plants_filtered_by_bed_and_season() {
    let service = service().await;
    let bed_a = service
        .create_bed(NewBed {
            name: "A".to_string(),
            dimensions: "4x4".to_string(),
            notes: None,
        })
        .await
        .unwrap();
    let bed_b = service
        .create_bed(NewBed {
            name: "B".to_string(),
            dimensions: "4x4".to_string(),
            notes: None,
        })
        .await
        .unwrap();

    let mut winter_plant = new_plant("Leek", bed_a.uuid);
    winter_plant.season = Some(Season::Winter);
    service.create_plant(winter_plant).await.unwrap();

    let mut summer_plant = new_plant("Corn", bed_b.uuid);
    summer_plant.season = Some(Season::Summer);
    service.create_plant(summer_plant).await.unwrap();

    assert_eq!(service.get_plants().await.unwrap().len(), 2);
    assert_eq!(service.get_plants_for_bed(&bed_a.uuid).await.unwrap().len(), 1);

    let winter = service.get_plants_by_season(Season::Winter).await.unwrap();
    assert_eq!(winter.len(), 1);
    assert_eq!(winter[0].name, "Leek");
}

#[tokio::test]
async fn test_garden_stats_sum_quantities() {
    let service = service().await;
    let bed = service
        .create_bed(NewBed {
            name: "Bed".to_string(),
            dimensions: "4x8".to_string(),
            notes: None,
        })
        .await
        .unwrap();

    let mut plant = new_plant("Lettuce", bed.uuid);
    plant.quantity = 6;
    service.create_plant(plant).await.unwrap();

    let mut plant = new_plant("Radish", bed.uuid);
    plant.quantity = 4;
    service.create_plant(plant).await.unwrap();

    let stats = service.garden_stats().await.unwrap();
    assert_eq!(stats.total_plants, 10);
    assert_eq!(stats.plants_by_status["planted"], 10);
    assert_eq!(stats.plants_by_status["finished"], 0);

    let year = datetime::current_year().to_string();
    assert_eq!(stats.plants_by_year[&year], 10);
}

#[tokio::test]
async fn test_bed_stats_space_utilization() {
    let service = service().await;
    let bed = service
        .create_bed(NewBed {
            name: "North".to_string(),
            dimensions: "4x8".to_string(),
            notes: None,
        })
        .await
        .unwrap();

    let mut plant = new_plant("Squash", bed.uuid);
    plant.quantity = 4;
    plant.space_required = 2;
    service.create_plant(plant).await.unwrap();

    let stats = service.bed_stats(&bed.uuid, None).await.unwrap();
    assert_eq!(stats.bed_name, "North");
    assert_eq!(stats.total_plants, 4);
    assert_eq!(stats.total_space_used, 8);
    assert_eq!(stats.space_utilization, "25.0%");
}

#[tokio::test]
async fn test_bed_stats_malformed_dimensions() {
    let service = service().await;
    let bed = service
        .create_bed(NewBed {
            name: "Odd".to_string(),
            dimensions: "round-ish".to_string(),
            notes: None,
        })
        .await
        .unwrap();

    let stats = service.bed_stats(&bed.uuid, None).await.unwrap();
    assert_eq!(stats.space_utilization, "N/A");
}

#[tokio::test]
async fn test_available_years_always_include_current_and_next() {
    let service = service().await;
    let years = service.available_years().await.unwrap();

    let current = datetime::current_year();
    assert!(years.contains(&current));
    assert!(years.contains(&(current + 1)));
    // Descending order
    assert!(years.windows(2).all(|w| w[0] > w[1]));
}

#[tokio::test]
async fn test_chart_payload_shape() {
    let service = service().await;

    let chart = service.plants_by_year_chart().await.unwrap();
    assert_eq!(chart["data"][0]["type"], "bar");
    assert_eq!(chart["layout"]["title"], "Plants by Year");
    assert!(chart["data"][0]["x"].is_array());

    let chart = service.plants_by_season_chart().await.unwrap();
    assert_eq!(chart["layout"]["xaxis"]["title"], "Season");
    assert_eq!(chart["data"][0]["x"].as_array().unwrap().len(), 4);
}
