//! Bundled inspection checklist definition
//!
//! The standard hotel inspection taxonomy ships with the binary so a
//! workspace works out of the box. A workspace config may point at a
//! replacement JSON file with the same shape.

/// Bundled checklist catalog (8 categories, 21 sections, 46 items)
pub const BUNDLED_CATALOG: &str = r#"{
  "categories": [
    {
      "categoryId": 1,
      "categoryName": "Front Desk and Reception",
      "sections": [
        {
          "sectionId": 101,
          "sectionName": "Cleanliness & Organization",
          "items": [
            { "itemId": 1001, "description": "Desk and counters are clean, clutter-free, and organized" },
            { "itemId": 1002, "description": "Floors, windows, and signage are well-maintained" }
          ]
        },
        {
          "sectionId": 102,
          "sectionName": "Staff Presentation and Interaction",
          "items": [
            { "itemId": 1003, "description": "Staff members are in proper uniforms and polite" },
            { "itemId": 1004, "description": "Check-in and check-out processes are efficient and guest-friendly" }
          ]
        },
        {
          "sectionId": 103,
          "sectionName": "Resources & Communication",
          "items": [
            { "itemId": 1005, "description": "Adequate information displays (brochures, maps, directories)" },
            { "itemId": 1006, "description": "Functioning computers/telephones and all equipment in working order" }
          ]
        }
      ],
      "createdAt": "2025-04-12T12:00:00Z",
      "updatedAt": "2025-04-12T12:00:00Z"
    },
    {
      "categoryId": 2,
      "categoryName": "Lobby and Common Areas",
      "sections": [
        {
          "sectionId": 104,
          "sectionName": "Cleanliness and Presentation",
          "items": [
            { "itemId": 1007, "description": "Floors, carpets, seating areas, and decor are free from dust and stains" },
            { "itemId": 1008, "description": "Walls, windows, and entryways are polished and free of smudges" }
          ]
        },
        {
          "sectionId": 105,
          "sectionName": "Maintenance and Safety",
          "items": [
            { "itemId": 1009, "description": "Lighting (natural and artificial) is sufficient and well-placed" },
            { "itemId": 1010, "description": "Furniture and fixtures are in good repair; any damaged items are tagged for repair" }
          ]
        },
        {
          "sectionId": 106,
          "sectionName": "Amenities and Accessibility",
          "items": [
            { "itemId": 1011, "description": "Brochure stands, information kiosks, and concierge counters are accessible" },
            { "itemId": 1012, "description": "Signage for restrooms, exits, and other facilities is clear" }
          ]
        }
      ],
      "createdAt": "2025-04-12T12:00:00Z",
      "updatedAt": "2025-04-12T12:00:00Z"
    },
    {
      "categoryId": 3,
      "categoryName": "Guest Rooms and Suites",
      "sections": [
        {
          "sectionId": 107,
          "sectionName": "Cleanliness and Condition",
          "items": [
            { "itemId": 1013, "description": "Bed linens, pillows, and mattresses are clean and pressed" },
            { "itemId": 1014, "description": "Floors, walls, windows, and furniture are clean and in good repair" },
            { "itemId": 1015, "description": "Curtains/blinds are functional and free from dust" }
          ]
        },
        {
          "sectionId": 108,
          "sectionName": "Functionality and Safety",
          "items": [
            { "itemId": 1016, "description": "Electrical outlets, light switches, and temperature controls are working" },
            { "itemId": 1017, "description": "Check that door locks, peepholes, and safes are functioning properly" },
            { "itemId": 1018, "description": "Confirm smoke detectors and emergency lighting are operational" }
          ]
        },
        {
          "sectionId": 109,
          "sectionName": "Bathroom and In-Room Amenities",
          "items": [
            { "itemId": 1019, "description": "Bathrooms are spotless with clean fixtures, properly stocked toiletries, and fresh towels" },
            { "itemId": 1020, "description": "Plumbing (toilets, sinks, showers) is in proper working condition with no leaks" }
          ]
        }
      ],
      "createdAt": "2025-04-12T12:00:00Z",
      "updatedAt": "2025-04-12T12:00:00Z"
    },
    {
      "categoryId": 4,
      "categoryName": "Housekeeping and Laundry Areas",
      "sections": [
        {
          "sectionId": 110,
          "sectionName": "Operational Efficiency",
          "items": [
            { "itemId": 1021, "description": "Adequate stock of linens, towels, and cleaning supplies" },
            { "itemId": 1022, "description": "Procedures for daily cleaning and deep cleaning are being followed" }
          ]
        },
        {
          "sectionId": 111,
          "sectionName": "Condition of Equipment and Supplies",
          "items": [
            { "itemId": 1023, "description": "Laundry equipment is maintained and functioning" },
            { "itemId": 1024, "description": "Areas are organized and free of clutter or hazards" }
          ]
        }
      ],
      "createdAt": "2025-04-12T12:00:00Z",
      "updatedAt": "2025-04-12T12:00:00Z"
    },
    {
      "categoryId": 5,
      "categoryName": "Food and Beverage Areas",
      "sections": [
        {
          "sectionId": 112,
          "sectionName": "Restaurant/Café and Bar Areas",
          "items": [
            { "itemId": 1025, "description": "Dining areas are clean, well-arranged, and meet ambiance standards" },
            { "itemId": 1026, "description": "Tables, chairs, and fixtures are in good condition" }
          ]
        },
        {
          "sectionId": 113,
          "sectionName": "Kitchen and Food Preparation Areas",
          "items": [
            { "itemId": 1027, "description": "Food safety protocols are followed (storage temperature, cleanliness, utensil condition)" },
            { "itemId": 1028, "description": "Equipment such as ovens, refrigerators, and dishwashers are functioning properly" }
          ]
        },
        {
          "sectionId": 114,
          "sectionName": "Safety and Compliance",
          "items": [
            { "itemId": 1029, "description": "Adequate sanitation supplies are available" },
            { "itemId": 1030, "description": "Proper labeling and storage for food items are observed" }
          ]
        }
      ],
      "createdAt": "2025-04-12T12:00:00Z",
      "updatedAt": "2025-04-12T12:00:00Z"
    },
    {
      "categoryId": 6,
      "categoryName": "Recreational and Additional Facilities",
      "sections": [
        {
          "sectionId": 115,
          "sectionName": "Pools, Spas, and Gyms",
          "items": [
            { "itemId": 1031, "description": "Areas are clean, well-maintained, and meet safety standards" },
            { "itemId": 1032, "description": "Equipment is inspected for wear and proper operation" },
            { "itemId": 1033, "description": "Safety features (lifeguards, emergency exits, signage) are in place" }
          ]
        },
        {
          "sectionId": 116,
          "sectionName": "Conference Rooms, Ballrooms, and Meeting Spaces",
          "items": [
            { "itemId": 1034, "description": "Rooms are set up as per event requirements" },
            { "itemId": 1035, "description": "Audio-visual equipment, lighting, and seating arrangements are checked" },
            { "itemId": 1036, "description": "Ensure emergency exits and safety signs are visible" }
          ]
        }
      ],
      "createdAt": "2025-04-12T12:00:00Z",
      "updatedAt": "2025-04-12T12:00:00Z"
    },
    {
      "categoryId": 7,
      "categoryName": "Exterior and Parking Areas",
      "sections": [
        {
          "sectionId": 117,
          "sectionName": "Entryways and Landscaping",
          "items": [
            { "itemId": 1037, "description": "Entrance areas and walkways are clear, clean, and well-lit" },
            { "itemId": 1038, "description": "Landscaping is neat; outdoor furniture is maintained" }
          ]
        },
        {
          "sectionId": 118,
          "sectionName": "Parking Lots and Access Roads",
          "items": [
            { "itemId": 1039, "description": "Parking areas are clean, properly marked (including handicapped spots) and free from debris" },
            { "itemId": 1040, "description": "Lighting is functional, and safety barriers/signage are in place" }
          ]
        }
      ],
      "createdAt": "2025-04-12T12:00:00Z",
      "updatedAt": "2025-04-12T12:00:00Z"
    },
    {
      "categoryId": 8,
      "categoryName": "Safety and Security Measures",
      "sections": [
        {
          "sectionId": 119,
          "sectionName": "Surveillance and Access Control",
          "items": [
            { "itemId": 1041, "description": "CCTV cameras are operational and covering key areas" },
            { "itemId": 1042, "description": "Electronic access controls (door locks, safes, alarm systems) are functioning" }
          ]
        },
        {
          "sectionId": 120,
          "sectionName": "Emergency Preparedness",
          "items": [
            { "itemId": 1043, "description": "Fire extinguishers, sprinkler systems, and emergency exits are accessible and inspected" },
            { "itemId": 1044, "description": "Staff training records on safety and emergency procedures are up to date" }
          ]
        },
        {
          "sectionId": 121,
          "sectionName": "Maintenance and Hazard Identification",
          "items": [
            { "itemId": 1045, "description": "A log of reported issues and corrective actions is maintained" },
            { "itemId": 1046, "description": "Look for potential hazards (e.g., wet floors, loose fixtures) and ensure they are documented and promptly addressed" }
          ]
        }
      ],
      "createdAt": "2025-04-12T12:00:00Z",
      "updatedAt": "2025-04-12T12:00:00Z"
    }
  ]
}"#;
