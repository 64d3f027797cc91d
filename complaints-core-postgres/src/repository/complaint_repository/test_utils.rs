use std::str::FromStr;

use chrono::Utc;
use complaints_core_api::domain::{ComplaintStatus, Priority, Role};
use complaints_core_db::models::complaint::ComplaintModel;
use complaints_core_db::models::principal::PrincipalModel;
use heapless::String as HeaplessString;
use rand::Rng;
use uuid::Uuid;

pub fn create_test_principal() -> PrincipalModel {
    PrincipalModel {
        id: Uuid::new_v4(),
        display_name: HeaplessString::from_str("Test Student").unwrap(),
        phone: None,
        student_number: None,
        role: Role::Student,
        created_at: Utc::now(),
    }
}

pub fn create_test_complaint(owner: Uuid) -> ComplaintModel {
    let now = Utc::now();
    // Random suffix keeps reference ids distinct across fixtures.
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000);
    ComplaintModel {
        id: Uuid::new_v4(),
        reference_id: HeaplessString::from_str(&format!("CMP-{suffix:06}")).unwrap(),
        title: HeaplessString::from_str("Wifi down").unwrap(),
        description: HeaplessString::from_str("No connectivity in block C").unwrap(),
        category: HeaplessString::from_str("Hostel").unwrap(),
        priority: Priority::High,
        status: ComplaintStatus::New,
        anonymous: false,
        attachment_urls: Vec::new(),
        owner_person_id: owner,
        created_at: now,
        updated_at: now,
    }
}
