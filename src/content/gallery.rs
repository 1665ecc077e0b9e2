//! Image and video galleries shown beside each scene

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GalleryItem {
    /// Image path under the static directory
    pub src: Option<&'static str>,
    /// Video page URL, takes priority over `src`
    pub video_url: Option<&'static str>,
    pub description: &'static str,
    pub citation: Option<&'static str>,
}

/// Era A: dawn of spaceflight (launch station)
pub static ERA_A_GALLERY: &[GalleryItem] = &[
    GalleryItem {
        src: Some("/A.1.1.png"),
        video_url: None,
        description: "U.S. testing of German V2 Rockets",
        citation: Some("Parissa DJangi. \"The True Story of the Secret Program That Brought Nazi Scientists to the U.S.\" History. National Geographic, May 12, 2025. https://www.nationalgeographic.com/history/article/operation-paperclip."),
    },
    GalleryItem {
        src: Some("/A.1.2.png"),
        video_url: None,
        description: "German V2 Rocket Scientists",
        citation: Some("Parissa DJangi. \"The True Story of the Secret Program That Brought Nazi Scientists to the U.S.\" History. National Geographic, May 12, 2025. https://www.nationalgeographic.com/history/article/operation-paperclip."),
    },
    GalleryItem {
        src: Some("/A.3.1.png"),
        video_url: None,
        description: "Dr. William H. Pickering, Dr. James A. van Allen, Dr. Wenher von Braun holding model of Explorer 1 satellite",
        citation: Some("Loff, Sarah. \"Explorer 1 Overview - NASA.\" NASA, March 18, 2015. https://www.nasa.gov/history/explorer-1-overview/."),
    },
    GalleryItem {
        src: Some("/a.5.1.png"),
        video_url: None,
        description: "Astronaut Alan Shepard and the \"Freedom 7\"",
        citation: Some("Neufeld, Michael. \"First American in Space: The Flight of Alan B. Shepard.\" airandspace.si.edu, May 5, 2021. https://airandspace.si.edu/stories/editorial/first-american-space-flight-alan-b-shepard."),
    },
    GalleryItem {
        src: Some("/A.5.2.png"),
        video_url: None,
        description: "President Kennedy awarding Shepard with NASA's Distinguished Service Medal",
        citation: Some("Neufeld, Michael. \"First American in Space: The Flight of Alan B. Shepard.\" airandspace.si.edu, May 5, 2021. https://airandspace.si.edu/stories/editorial/first-american-space-flight-alan-b-shepard."),
    },
];

/// Era B: race to the moon
pub static ERA_B_GALLERY: &[GalleryItem] = &[
    GalleryItem {
        src: Some("/B.2.1.png"),
        video_url: None,
        description: "\"Earthrise\" photograph",
        citation: Some("NASA. \"Apollo 8: Earthrise - NASA.\" NASA, December 23, 2020. https://www.nasa.gov/image-article/apollo-8-earthrise/."),
    },
    GalleryItem {
        src: Some("/B.4.1.png"),
        video_url: None,
        description: "International Space Station",
        citation: Some("NASA ON THE AIR. \"30 Years of International Collaboration on the ISS,\" November 4, 2023. https://nasaontheair.wordpress.com/2023/11/04/55-years-of-international-collaboration-on-the-iss/."),
    },
    GalleryItem {
        src: Some("/B.5.1.png"),
        video_url: None,
        description: "Mr. Dennis Tito suited up for his space mission",
        citation: Some("Wall, Mike. \"First Space Tourist: How a U.S. Millionaire Bought a Ticket to Orbit.\" Space.com. Space, April 27, 2011. https://www.space.com/11492-space-tourism-pioneer-dennis-tito.html."),
    },
    GalleryItem {
        src: None,
        video_url: Some("https://www.youtube.com/watch?v=mKAIL8DDemg"),
        description: "Space tourist Dennis Tito speaks about his experience",
        citation: Some("YouTube video: Space tourist Dennis Tito speaks"),
    },
];

/// Era C: corporate conquest (mars)
pub static ERA_C_GALLERY: &[GalleryItem] = &[
    GalleryItem {
        src: Some("/C.3.1.png"),
        video_url: None,
        description: "SpaceX's Falcon 9 rocket landing",
        citation: Some("Wall, Mike. \"SpaceX Rocket Landing Is a Giant Leap toward a City on Mars, Elon Musk Says.\" Space.com. Space, December 22, 2015. https://www.space.com/31445-spacex-rocket-landing-mars-colony-elon-musk.html."),
    },
    GalleryItem {
        src: None,
        video_url: Some("https://www.youtube.com/watch?v=dLQ2tZEH6G0"),
        description: "SpaceX Falcon 1 video",
        citation: Some("YouTube video: SpaceX Falcon 1"),
    },
];
